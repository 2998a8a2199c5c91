//! The [`Agent`] trait and its sensing vocabulary.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// One of the three proximity sensors, relative to the agent's heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sensor {
    /// 90° counter-clockwise of the heading.
    Left,
    /// Along the heading.
    Front,
    /// 90° clockwise of the heading.
    Right,
}

impl Sensor {
    /// All sensors in reading order.
    pub const ALL: [Sensor; 3] = [Sensor::Left, Sensor::Front, Sensor::Right];

    /// Position in [`WallReadings::as_array`].
    pub fn index(self) -> usize {
        match self {
            Sensor::Left => 0,
            Sensor::Front => 1,
            Sensor::Right => 2,
        }
    }

    /// The name user scripts pass to `read_sensor`.
    pub fn script_name(self) -> &'static str {
        match self {
            Sensor::Left => "Left Prox",
            Sensor::Front => "Front Prox",
            Sensor::Right => "Right Prox",
        }
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.script_name())
    }
}

/// A sensor name that matches none of the known sensors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseSensorError {
    name: String,
}

impl fmt::Display for ParseSensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sensor {:?}; expected \"Left Prox\", \"Front Prox\" or \"Right Prox\"",
            self.name
        )
    }
}

impl Error for ParseSensorError {}

impl FromStr for Sensor {
    type Err = ParseSensorError;

    /// Accepts the script names (`"Front Prox"`) and the bare words
    /// (`"front"`), ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let word = trimmed
            .strip_suffix("Prox")
            .or_else(|| trimmed.strip_suffix("prox"))
            .unwrap_or(trimmed)
            .trim();
        if word.eq_ignore_ascii_case("left") {
            Ok(Sensor::Left)
        } else if word.eq_ignore_ascii_case("front") {
            Ok(Sensor::Front)
        } else if word.eq_ignore_ascii_case("right") {
            Ok(Sensor::Right)
        } else {
            Err(ParseSensorError {
                name: s.to_string(),
            })
        }
    }
}

/// Wall presence reported by the three sensors.
///
/// `true` means a wall was detected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WallReadings {
    /// Left sensor.
    pub left: bool,
    /// Front sensor.
    pub front: bool,
    /// Right sensor.
    pub right: bool,
}

impl WallReadings {
    /// Build readings from `(left, front, right)`.
    pub const fn new(left: bool, front: bool, right: bool) -> Self {
        Self { left, front, right }
    }

    /// `[left, front, right]`.
    pub fn as_array(self) -> [bool; 3] {
        [self.left, self.front, self.right]
    }

    /// The reading of one sensor.
    pub fn get(self, sensor: Sensor) -> bool {
        self.as_array()[sensor.index()]
    }
}

impl From<[bool; 3]> for WallReadings {
    fn from([left, front, right]: [bool; 3]) -> Self {
        Self { left, front, right }
    }
}

/// The capability set every maze agent exposes to scripts and solvers.
///
/// # Contract
///
/// - Moving into a wall is a silent no-op, never an error.
/// - `check_for_walls` has no side effects on pose.
/// - `reset` restores the agent to the maze start with a one-entry path.
///
/// The trait is object-safe so hosts can hold a `Box<dyn Agent>`.
pub trait Agent {
    /// Advance one unit along the current heading if nothing blocks it.
    fn move_forward(&mut self);

    /// Rotate counter-clockwise by the agent's turn step.
    fn turn_left(&mut self);

    /// Rotate clockwise by the agent's turn step.
    fn turn_right(&mut self);

    /// Rotate 180°.
    fn turn_around(&mut self);

    /// Read all three sensors.
    fn check_for_walls(&self) -> WallReadings;

    /// Whether the agent has reached the goal.
    fn is_solved(&self) -> bool;

    /// Return to the start pose and clear the path.
    fn reset(&mut self);

    /// Length of the recorded path, including the start entry.
    fn steps(&self) -> usize;

    /// Read a single sensor.
    fn read_sensor(&self, sensor: Sensor) -> bool {
        self.check_for_walls().get(sensor)
    }
}

impl<A: Agent + ?Sized> Agent for &mut A {
    fn move_forward(&mut self) {
        (**self).move_forward();
    }

    fn turn_left(&mut self) {
        (**self).turn_left();
    }

    fn turn_right(&mut self) {
        (**self).turn_right();
    }

    fn turn_around(&mut self) {
        (**self).turn_around();
    }

    fn check_for_walls(&self) -> WallReadings {
        (**self).check_for_walls()
    }

    fn is_solved(&self) -> bool {
        (**self).is_solved()
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn steps(&self) -> usize {
        (**self).steps()
    }

    fn read_sensor(&self, sensor: Sensor) -> bool {
        (**self).read_sensor(sensor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_script_names() {
        assert_eq!("Left Prox".parse::<Sensor>(), Ok(Sensor::Left));
        assert_eq!("Front Prox".parse::<Sensor>(), Ok(Sensor::Front));
        assert_eq!("Right Prox".parse::<Sensor>(), Ok(Sensor::Right));
    }

    #[test]
    fn parses_bare_words_any_case() {
        assert_eq!("front".parse::<Sensor>(), Ok(Sensor::Front));
        assert_eq!(" LEFT ".parse::<Sensor>(), Ok(Sensor::Left));
        assert_eq!("right prox".parse::<Sensor>(), Ok(Sensor::Right));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "Back Prox".parse::<Sensor>().unwrap_err();
        assert!(err.to_string().contains("Back Prox"));
        assert!("".parse::<Sensor>().is_err());
    }

    #[test]
    fn script_name_roundtrips() {
        for s in Sensor::ALL {
            assert_eq!(s.to_string().parse::<Sensor>(), Ok(s));
        }
    }

    #[test]
    fn readings_index_by_sensor() {
        let r = WallReadings::new(true, false, true);
        assert_eq!(r.as_array(), [true, false, true]);
        assert!(r.get(Sensor::Left));
        assert!(!r.get(Sensor::Front));
        assert!(r.get(Sensor::Right));
        assert_eq!(WallReadings::from([true, false, true]), r);
    }
}
