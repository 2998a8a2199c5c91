//! A mock agent driven by canned sensor readings.

use std::sync::atomic::{AtomicUsize, Ordering};

use mazemouse_agent::{Agent, WallReadings};

/// A command the mock received.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    MoveForward,
    TurnLeft,
    TurnRight,
    TurnAround,
    Reset,
}

/// Replays `readings` one per `check_for_walls` call and logs every
/// command it receives.
///
/// Once the readings run out, the last one repeats. The agent reports
/// solved after `solve_after_moves` forward moves, or never if `None`.
pub struct ScriptedAgent {
    readings: Vec<WallReadings>,
    reads: AtomicUsize,
    solve_after_moves: Option<usize>,
    moves: usize,
    pub actions: Vec<Action>,
}

impl ScriptedAgent {
    pub fn new(readings: Vec<WallReadings>, solve_after_moves: Option<usize>) -> Self {
        Self {
            readings,
            reads: AtomicUsize::new(0),
            solve_after_moves,
            moves: 0,
            actions: Vec::new(),
        }
    }

    /// Number of `check_for_walls` calls so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    /// Number of forward moves so far.
    pub fn moves(&self) -> usize {
        self.moves
    }
}

impl Agent for ScriptedAgent {
    fn move_forward(&mut self) {
        self.moves += 1;
        self.actions.push(Action::MoveForward);
    }

    fn turn_left(&mut self) {
        self.actions.push(Action::TurnLeft);
    }

    fn turn_right(&mut self) {
        self.actions.push(Action::TurnRight);
    }

    fn turn_around(&mut self) {
        self.actions.push(Action::TurnAround);
    }

    fn check_for_walls(&self) -> WallReadings {
        let n = self.reads.fetch_add(1, Ordering::Relaxed);
        match self.readings.get(n).or(self.readings.last()) {
            Some(&r) => r,
            None => WallReadings::new(true, true, true),
        }
    }

    fn is_solved(&self) -> bool {
        self.solve_after_moves.is_some_and(|n| self.moves >= n)
    }

    fn reset(&mut self) {
        self.moves = 0;
        self.reads.store(0, Ordering::Relaxed);
        self.actions.push(Action::Reset);
    }

    fn steps(&self) -> usize {
        self.moves + 1
    }
}
