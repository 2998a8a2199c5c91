//! A disc-shaped agent moving through pixel space.
//!
//! The agent keeps a floating-point position and an angle in degrees.
//! Moves are gated by a circle/segment collision test against the
//! maze walls, and the three proximity sensors are rays cast at fixed
//! offsets from the heading.

use std::sync::Arc;

use mazemouse_core::Cell;
use mazemouse_grid::geometry::{circle_intersects_segment, ray_distance};
use mazemouse_grid::{Grid, Point, Segment, SegmentIndex};

use crate::agent::{Agent, Sensor, WallReadings};
use crate::config::{ConfigError, ContinuousConfig};

/// Sensor ray offsets from the heading, in `[left, front, right]` order.
const SENSOR_OFFSETS: [f64; 3] = [90.0, 0.0, -90.0];

fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// A continuous-space maze agent.
#[derive(Clone, Debug)]
pub struct ContinuousAgent {
    grid: Arc<Grid>,
    config: ContinuousConfig,
    index: SegmentIndex,
    position: Point,
    angle: f64,
    path: Vec<Point>,
}

impl ContinuousAgent {
    /// Validate `config`, index the grid's walls, and place the agent at
    /// the centre of the start cell facing 0°.
    pub fn new(grid: Arc<Grid>, config: ContinuousConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let index = SegmentIndex::new(&grid, config.cell_size);
        let mut agent = Self {
            grid,
            config,
            index,
            position: Point::default(),
            angle: 0.0,
            path: Vec::new(),
        };
        agent.reset();
        Ok(agent)
    }

    /// The maze this agent moves through.
    pub fn grid(&self) -> &Arc<Grid> {
        &self.grid
    }

    /// Tuning in effect.
    pub fn config(&self) -> &ContinuousConfig {
        &self.config
    }

    /// Centre of the disc.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Heading in degrees, in `[0, 360)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Face `angle` degrees. The value is wrapped into `[0, 360)`.
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = normalize_angle(angle);
    }

    /// Disc radius in pixels.
    pub fn radius(&self) -> f64 {
        self.config.radius()
    }

    /// Every accepted position since the last reset, starting with the
    /// start position.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// The cell containing the disc's centre, clamped to the grid.
    pub fn current_cell(&self) -> Cell {
        let s = self.config.cell_size;
        let col = (self.position.x / s).floor().clamp(0.0, f64::from(self.grid.width() - 1));
        let row = (self.position.y / s).floor().clamp(0.0, f64::from(self.grid.height() - 1));
        Cell::new(col as u32, row as u32)
    }

    fn cell_centre(&self, cell: Cell) -> Point {
        let s = self.config.cell_size;
        Point::new(
            (f64::from(cell.x) + 0.5) * s,
            (f64::from(cell.y) + 0.5) * s,
        )
    }

    /// Whether a disc of the agent's radius centred at `(x, y)` would
    /// touch any wall.
    pub fn check_collision(&self, x: f64, y: f64) -> bool {
        let centre = Point::new(x, y);
        let r = self.radius();
        self.index
            .query(Point::new(x - r, y - r), Point::new(x + r, y + r))
            .any(|wall| circle_intersects_segment(centre, r, wall))
    }

    /// [`check_collision`](Self::check_collision) against every wall,
    /// bypassing the segment index.
    pub fn check_collision_full_scan(&self, x: f64, y: f64) -> bool {
        let centre = Point::new(x, y);
        let r = self.radius();
        self.index
            .segments()
            .iter()
            .any(|wall| circle_intersects_segment(centre, r, wall))
    }

    // Samples the stride at intervals of at most half the radius. A wall
    // crossed between two samples lies within a quarter radius of one.
    fn sweep_collides(&self, step: Point) -> bool {
        let spacing = self.radius() / 2.0;
        let samples = (step.length() / spacing).ceil().max(1.0) as u32;
        (1..=samples).any(|i| {
            let p = self.position + step * (f64::from(i) / f64::from(samples));
            self.check_collision(p.x, p.y)
        })
    }

    /// The three sensor rays in `[left, front, right]` order.
    pub fn sensor_rays(&self) -> [Segment; 3] {
        let ranges = self.config.detection_ranges;
        std::array::from_fn(|i| {
            Segment::ray(self.position, self.angle + SENSOR_OFFSETS[i], ranges[i])
        })
    }

    /// Distance to the nearest wall along each sensor ray, or `None`
    /// if nothing lies within range.
    pub fn sense_distances(&self) -> [Option<f64>; 3] {
        self.sensor_rays().map(|ray| {
            let (lo, hi) = ray.bounds();
            self.index
                .query(lo, hi)
                .filter_map(|wall| ray_distance(&ray, wall))
                .fold(None, |nearest: Option<f64>, d| {
                    Some(nearest.map_or(d, |n| n.min(d)))
                })
        })
    }

    /// Distance reported by one sensor.
    pub fn sense_distance(&self, sensor: Sensor) -> Option<f64> {
        self.sense_distances()[sensor.index()]
    }

    /// Try to advance by `speed` along the heading. Returns whether the
    /// move was accepted.
    ///
    /// The whole stride is checked, not just its end point, so a speed
    /// larger than the disc cannot carry it through a wall.
    pub fn try_move_forward(&mut self) -> bool {
        let step = Point::from_angle(self.angle) * self.config.speed;
        let candidate = self.position + step;
        if self.sweep_collides(step) {
            tracing::trace!(
                x = candidate.x,
                y = candidate.y,
                angle = self.angle,
                "move blocked by wall"
            );
            return false;
        }
        self.position = candidate;
        self.path.push(candidate);
        true
    }
}

impl Agent for ContinuousAgent {
    fn move_forward(&mut self) {
        self.try_move_forward();
    }

    fn turn_left(&mut self) {
        self.set_angle(self.angle + self.config.rotation_speed);
    }

    fn turn_right(&mut self) {
        self.set_angle(self.angle - self.config.rotation_speed);
    }

    fn turn_around(&mut self) {
        self.set_angle(self.angle + 180.0);
    }

    fn check_for_walls(&self) -> WallReadings {
        WallReadings::from(self.sense_distances().map(|d| d.is_some()))
    }

    /// True only while the centre is strictly inside the end cell.
    fn is_solved(&self) -> bool {
        let s = self.config.cell_size;
        let end = self.grid.end();
        let (x0, y0) = (f64::from(end.x) * s, f64::from(end.y) * s);
        let p = self.position;
        x0 < p.x && p.x < x0 + s && y0 < p.y && p.y < y0 + s
    }

    fn reset(&mut self) {
        self.position = self.cell_centre(self.grid.start());
        self.angle = 0.0;
        self.path.clear();
        self.path.push(self.position);
    }

    fn steps(&self) -> usize {
        self.path.len()
    }
}
