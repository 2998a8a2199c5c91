//! Criterion benchmarks for continuous-agent collision and sensing.
//!
//! Compares the per-cell segment index against a scan of every wall.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use mazemouse_agent::Agent;
use mazemouse_bench::{continuous_agent, reference_grid};
use mazemouse_grid::SegmentIndex;

/// Benchmark: collision test at the start position, indexed.
fn bench_collision_indexed(c: &mut Criterion) {
    let agent = continuous_agent(reference_grid(1));
    let p = agent.position();

    c.bench_function("collision_indexed_10k", |b| {
        b.iter(|| black_box(agent.check_collision(black_box(p.x), black_box(p.y))));
    });
}

/// Benchmark: the same test against every wall segment.
fn bench_collision_full_scan(c: &mut Criterion) {
    let agent = continuous_agent(reference_grid(1));
    let p = agent.position();

    c.bench_function("collision_full_scan_10k", |b| {
        b.iter(|| black_box(agent.check_collision_full_scan(black_box(p.x), black_box(p.y))));
    });
}

/// Benchmark: three proximity rays.
fn bench_sense_distances(c: &mut Criterion) {
    let agent = continuous_agent(reference_grid(1));

    c.bench_function("sense_distances_10k", |b| {
        b.iter(|| black_box(agent.sense_distances()));
    });
}

/// Benchmark: one forward step including collision check.
fn bench_move_forward(c: &mut Criterion) {
    let mut agent = continuous_agent(reference_grid(1));

    c.bench_function("continuous_move_forward_10k", |b| {
        b.iter(|| {
            agent.move_forward();
            if agent.steps() > 64 {
                agent.reset();
            }
        });
    });
}

/// Benchmark: build the segment index for a 100x100 maze.
fn bench_index_build(c: &mut Criterion) {
    let grid = reference_grid(1);

    c.bench_function("segment_index_build_10k", |b| {
        b.iter(|| black_box(SegmentIndex::new(&grid, 50.0)));
    });
}

criterion_group!(
    benches,
    bench_collision_indexed,
    bench_collision_full_scan,
    bench_sense_distances,
    bench_move_forward,
    bench_index_build,
);
criterion_main!(benches);
