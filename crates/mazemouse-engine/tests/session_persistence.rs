//! Sessions hand grids to and from the blob codec.

use mazemouse_agent::Agent;
use mazemouse_codec::{from_bytes, grid_hash, to_bytes};
use mazemouse_engine::{AgentKind, Pose, Session, SessionConfig};
use mazemouse_test_utils::serpentine;
use proptest::prelude::*;

fn config(width: u32, height: u32, seed: u64) -> SessionConfig {
    SessionConfig {
        width,
        height,
        seed: Some(seed),
        ..SessionConfig::default()
    }
}

#[test]
fn saved_maze_reloads_identically() {
    let original = Session::new(config(12, 8, 21)).unwrap();
    let blob = to_bytes(original.grid()).unwrap();

    let mut other = Session::new(config(3, 3, 0)).unwrap();
    other.load_grid(from_bytes(&blob).unwrap()).unwrap();

    assert_eq!(**other.grid(), **original.grid());
    assert_eq!(grid_hash(other.grid()), grid_hash(original.grid()));
    assert_eq!(other.snapshot().seed, Some(21));
    assert_eq!((other.snapshot().width, other.snapshot().height), (12, 8));
}

#[test]
fn loaded_fixture_is_solvable() {
    let mut session = Session::new(config(2, 2, 0)).unwrap();
    session.load_grid(serpentine(5, 4)).unwrap();
    let report = session.solve().unwrap();
    assert!(session.snapshot().solved);
    // Rows 0-2 in full, then straight down into the goal corner.
    assert_eq!(report.forward_moves, 15);
}

#[test]
fn continuous_session_survives_reload() {
    let mut session = Session::new(SessionConfig {
        agent: AgentKind::Continuous,
        ..config(4, 4, 5)
    })
    .unwrap();
    session.agent_mut().move_forward();
    session.load_grid(serpentine(4, 4)).unwrap();
    assert_eq!(session.snapshot().steps, 1);
    assert!(matches!(session.snapshot().pose, Pose::Continuous { .. }));
}

#[test]
fn same_seed_sessions_share_layout() {
    let a = Session::new(config(15, 15, 1234)).unwrap();
    let b = Session::new(config(15, 15, 1234)).unwrap();
    assert_eq!(grid_hash(a.grid()), grid_hash(b.grid()));
}

proptest! {
    #[test]
    fn discrete_sessions_always_solve(w in 1u32..20, h in 1u32..20, seed in any::<u64>()) {
        let mut session = Session::new(config(w, h, seed)).unwrap();
        let report = session.solve().unwrap();
        prop_assert!(report.decisions <= 4 * (w * h) as usize);
        prop_assert!(session.agent().is_solved());
    }
}
