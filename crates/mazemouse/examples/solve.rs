//! End-to-end demo: generate a maze, solve it with the left-hand rule,
//! then run a sensor-driven script on the continuous agent.
//!
//! Pass a seed as the first argument to reproduce a maze:
//!
//! ```text
//! RUST_LOG=debug cargo run -p mazemouse --example solve -- 42
//! ```

use mazemouse::prelude::*;
use tracing_subscriber::EnvFilter;

fn render(grid: &Grid, visits: &dyn Fn(Cell) -> u32) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            out.push('+');
            out.push_str(if grid.has_wall(Cell::new(x, y), Heading::North) {
                "---"
            } else {
                "   "
            });
        }
        out.push_str("+\n");
        for x in 0..grid.width() {
            let cell = Cell::new(x, y);
            out.push(if grid.has_wall(cell, Heading::West) { '|' } else { ' ' });
            let mark = match visits(cell) {
                0 => ' ',
                1 => '.',
                2 => 'o',
                _ => '#',
            };
            out.push(' ');
            out.push(mark);
            out.push(' ');
        }
        out.push_str("|\n");
    }
    for _ in 0..grid.width() {
        out.push_str("+---");
    }
    out.push_str("+\n");
    out
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok());

    println!("=== Mazemouse Left-Hand Demo ===\n");

    // --- Discrete agent, premade solver ---
    let mut session = Session::new(SessionConfig {
        seed,
        ..SessionConfig::default()
    })
    .unwrap();
    let grid = session.grid().clone();
    println!(
        "Maze {}x{} (seed {})",
        grid.width(),
        grid.height(),
        grid.seed().unwrap_or_default()
    );

    match session.solve() {
        Ok(report) => println!(
            "Maze solved in {} steps ({} decisions, {} forward moves)",
            report.steps, report.decisions, report.forward_moves
        ),
        Err(e) => println!("Solver gave up: {e}"),
    }

    if let SessionAgent::Discrete(mouse) = session.agent() {
        let counts = mouse.visit_counts();
        let visits = |cell: Cell| counts.get(&cell).copied().unwrap_or(0);
        println!("\n{}", render(&grid, &visits));
    }

    // --- Continuous agent, user-style script ---
    println!("Continuous agent script:");
    let mut mouse = ContinuousAgent::new(grid.clone(), ContinuousConfig::default()).unwrap();
    let budget = 200 * grid.cell_count();
    let mut actions = 0;
    while !mouse.is_solved() && actions < budget {
        let front = mouse.read_sensor("Front Prox".parse().unwrap());
        let left = mouse.read_sensor("Left Prox".parse().unwrap());
        let right = mouse.read_sensor("Right Prox".parse().unwrap());
        match (left, front, right) {
            (false, _, true) => {
                mouse.turn_left();
                mouse.move_forward();
            }
            (true, _, false) => {
                mouse.turn_right();
                mouse.move_forward();
            }
            (_, false, _) => mouse.move_forward(),
            (true, true, true) => mouse.turn_around(),
            (false, true, false) => mouse.turn_left(),
        }
        actions += 1;
    }
    let p = mouse.position();
    println!(
        "  after {actions} actions: position=({:.1}, {:.1}) angle={:.0} solved={}",
        p.x,
        p.y,
        mouse.angle(),
        mouse.is_solved()
    );
}
