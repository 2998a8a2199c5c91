//! Planar geometry for wall collision and distance sensing.
//!
//! Coordinates are in pixels with `y` growing downwards, matching the
//! grid's screen orientation. Angles are in degrees, measured
//! counter-clockwise from the positive `x` axis as seen on screen.

use std::ops::{Add, Mul, Sub};

/// Cross products with magnitude below this are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-12;

/// A point or vector in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component, growing downwards.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector for `angle` degrees.
    ///
    /// `y` is negated so that 90° points up the screen.
    pub fn from_angle(angle: f64) -> Self {
        let rad = angle.to_radians();
        Self::new(rad.cos(), -rad.sin())
    }

    /// Dot product.
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (z component of the 3D cross).
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        (other - self).length()
    }

    /// Whether both components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// A closed line segment from `a` to `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// First endpoint.
    pub a: Point,
    /// Second endpoint.
    pub b: Point,
}

impl Segment {
    /// Create a segment.
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// A ray of length `range` from `origin` along `angle` degrees.
    pub fn ray(origin: Point, angle: f64, range: f64) -> Self {
        Self::new(origin, origin + Point::from_angle(angle) * range)
    }

    /// Direction vector `b - a`.
    pub fn direction(&self) -> Point {
        self.b - self.a
    }

    /// Segment length.
    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    /// Axis-aligned bounding box as `(min, max)`.
    pub fn bounds(&self) -> (Point, Point) {
        (
            Point::new(self.a.x.min(self.b.x), self.a.y.min(self.b.y)),
            Point::new(self.a.x.max(self.b.x), self.a.y.max(self.b.y)),
        )
    }
}

/// Whether the disc of `radius` around `center` touches `segment`.
///
/// Solves `|a + t(b - a) - center|² = radius²` for `t`. The segment
/// touches the disc when a root lies in `[0, 1]`, or when the roots
/// straddle `[0, 1]` so the whole segment is inside. A degenerate
/// segment is tested as a point.
pub fn circle_intersects_segment(center: Point, radius: f64, segment: &Segment) -> bool {
    let d = segment.direction();
    let f = segment.a - center;
    let a = d.dot(d);
    let c = f.dot(f) - radius * radius;
    if a <= PARALLEL_EPSILON {
        return c <= 0.0;
    }
    let b = 2.0 * f.dot(d);
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return false;
    }
    let root = disc.sqrt();
    let t1 = (-b - root) / (2.0 * a);
    let t2 = (-b + root) / (2.0 * a);
    (0.0..=1.0).contains(&t1) || (0.0..=1.0).contains(&t2) || (t1 < 0.0 && t2 > 1.0)
}

/// Where `ray` first crosses `wall`, as a parameter `t` in `[0, 1]`
/// along the ray.
///
/// Parallel and collinear pairs report no crossing.
pub fn ray_intersection(ray: &Segment, wall: &Segment) -> Option<f64> {
    let r = ray.direction();
    let s = wall.direction();
    let denom = r.cross(s);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }
    let qp = wall.a - ray.a;
    let t = qp.cross(s) / denom;
    let u = qp.cross(r) / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(t)
    } else {
        None
    }
}

/// Distance from the ray origin to `wall`, if the ray reaches it.
pub fn ray_distance(ray: &Segment, wall: &Segment) -> Option<f64> {
    ray_intersection(ray, wall).map(|t| t * ray.length())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
        Segment::new(Point::new(ax, ay), Point::new(bx, by))
    }

    // ── Angles ──────────────────────────────────────────────

    #[test]
    fn from_angle_uses_screen_orientation() {
        let east = Point::from_angle(0.0);
        assert!((east.x - 1.0).abs() < EPS && east.y.abs() < EPS);
        let up = Point::from_angle(90.0);
        assert!(up.x.abs() < EPS && (up.y + 1.0).abs() < EPS);
        let west = Point::from_angle(180.0);
        assert!((west.x + 1.0).abs() < EPS);
        let down = Point::from_angle(270.0);
        assert!((down.y - 1.0).abs() < EPS);
    }

    // ── Circle / segment ────────────────────────────────────

    #[test]
    fn circle_crossing_segment() {
        let wall = seg(50.0, 0.0, 50.0, 50.0);
        assert!(circle_intersects_segment(Point::new(40.0, 25.0), 12.5, &wall));
        assert!(!circle_intersects_segment(Point::new(35.0, 25.0), 12.5, &wall));
    }

    #[test]
    fn circle_near_endpoint() {
        let wall = seg(50.0, 0.0, 50.0, 50.0);
        // Beyond the end of the segment but within radius of the endpoint.
        assert!(circle_intersects_segment(Point::new(45.0, 55.0), 10.0, &wall));
        // Beyond the end and out of reach.
        assert!(!circle_intersects_segment(Point::new(50.0, 70.0), 10.0, &wall));
    }

    #[test]
    fn segment_inside_circle_counts() {
        let short = seg(24.0, 25.0, 26.0, 25.0);
        assert!(circle_intersects_segment(Point::new(25.0, 25.0), 12.5, &short));
    }

    #[test]
    fn degenerate_segment_is_a_point() {
        let dot = seg(10.0, 10.0, 10.0, 10.0);
        assert!(circle_intersects_segment(Point::new(12.0, 10.0), 3.0, &dot));
        assert!(!circle_intersects_segment(Point::new(20.0, 10.0), 3.0, &dot));
    }

    #[test]
    fn tangent_touch_counts() {
        let wall = seg(0.0, 0.0, 50.0, 0.0);
        assert!(circle_intersects_segment(Point::new(25.0, 10.0), 10.0, &wall));
    }

    // ── Ray / segment ───────────────────────────────────────

    #[test]
    fn ray_hits_perpendicular_wall() {
        let ray = Segment::ray(Point::new(25.0, 25.0), 0.0, 37.5);
        let wall = seg(50.0, 0.0, 50.0, 50.0);
        let d = ray_distance(&ray, &wall).unwrap();
        assert!((d - 25.0).abs() < EPS);
    }

    #[test]
    fn ray_short_of_wall_misses() {
        let ray = Segment::ray(Point::new(25.0, 25.0), 0.0, 20.0);
        let wall = seg(50.0, 0.0, 50.0, 50.0);
        assert_eq!(ray_intersection(&ray, &wall), None);
    }

    #[test]
    fn ray_passing_beside_wall_misses() {
        let ray = Segment::ray(Point::new(25.0, 25.0), 0.0, 100.0);
        let wall = seg(50.0, 30.0, 50.0, 50.0);
        assert_eq!(ray_intersection(&ray, &wall), None);
    }

    #[test]
    fn parallel_and_collinear_report_none() {
        let ray = seg(0.0, 0.0, 10.0, 0.0);
        assert_eq!(ray_intersection(&ray, &seg(0.0, 5.0, 10.0, 5.0)), None);
        assert_eq!(ray_intersection(&ray, &seg(2.0, 0.0, 8.0, 0.0)), None);
    }

    #[test]
    fn upward_ray_hits_top_wall() {
        let ray = Segment::ray(Point::new(25.0, 25.0), 90.0, 37.5);
        let wall = seg(0.0, 0.0, 50.0, 0.0);
        let d = ray_distance(&ray, &wall).unwrap();
        assert!((d - 25.0).abs() < 1e-6);
    }

    #[test]
    fn bounds_are_ordered() {
        let (min, max) = seg(10.0, 40.0, 5.0, 2.0).bounds();
        assert_eq!(min, Point::new(5.0, 2.0));
        assert_eq!(max, Point::new(10.0, 40.0));
    }
}
