//! Criterion benchmarks for maze generation and left-hand solving.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use mazemouse_agent::{decision_budget, Agent, DiscreteAgent, DiscreteConfig, WallFollowSolver};
use mazemouse_bench::{reference_grid, reference_session, STRESS_SIDE};
use mazemouse_engine::{AgentKind, Session};
use mazemouse_grid::generate;

/// Benchmark: carve a 100x100 maze.
fn bench_generate_reference(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("generate_100x100", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(generate(100, 100, Some(seed)).unwrap());
        });
    });
}

/// Benchmark: carve a 316x316 maze.
fn bench_generate_stress(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_stress");
    group.sample_size(20);
    group.bench_function("generate_316x316", |b| {
        b.iter(|| black_box(generate(STRESS_SIDE, STRESS_SIDE, Some(7)).unwrap()));
    });
    group.finish();
}

/// Benchmark: full left-hand solve of the reference maze.
fn bench_solve_discrete(c: &mut Criterion) {
    let grid = reference_grid(42);
    let budget = decision_budget(&grid);
    let mut agent = DiscreteAgent::new(Arc::clone(&grid), DiscreteConfig::default());

    c.bench_function("solve_discrete_100x100", |b| {
        b.iter(|| {
            agent.reset();
            let report = WallFollowSolver::new(&mut agent).run(budget).unwrap();
            black_box(report);
        });
    });
}

/// Benchmark: session construction plus solve.
fn bench_session_solve(c: &mut Criterion) {
    let config = reference_session(9, AgentKind::Discrete);

    c.bench_function("session_new_and_solve_100x100", |b| {
        b.iter(|| {
            let mut session = Session::new(config.clone()).unwrap();
            black_box(session.solve().unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_generate_reference,
    bench_generate_stress,
    bench_solve_discrete,
    bench_session_solve,
);
criterion_main!(benches);
