//! Benchmarks for the reptile simulation and pose projection.

use criterion::{criterion_group, criterion_main, Criterion};
use reptile::*;

fn pointer_path(frame: usize) -> InputState<f32> {
    let t = frame as f32 * 0.05;
    InputState::new(Vec2::new(400.0 + 200.0 * t.cos(), 300.0 + 120.0 * (2.0 * t).sin()))
}

fn bench_chain_simulation(c: &mut Criterion) {
    c.bench_function("chain_30_segments_60_steps", |b| {
        b.iter(|| {
            let mut chain: Chain<f32> =
                Chain::new(Vec2::new(400.0, 300.0), &ChainConfig::default()).unwrap();
            let config = SolverConfig::new();
            for frame in 0..60 {
                chain.step(&pointer_path(frame), &config, &mut NoOpStepObserver);
            }
            chain.positions()
        });
    });
}

fn bench_long_chain(c: &mut Criterion) {
    c.bench_function("chain_200_segments_60_steps", |b| {
        b.iter(|| {
            let config = ChainConfig::default().with_segments(200, 15.0);
            let mut chain: Chain<f32> = Chain::new(Vec2::new(400.0, 300.0), &config).unwrap();
            let solver = SolverConfig::new();
            for frame in 0..60 {
                chain.step(&pointer_path(frame), &solver, &mut NoOpStepObserver);
            }
            chain.positions()
        });
    });
}

fn bench_pose_projection(c: &mut Criterion) {
    let mut chain: Chain<f32> =
        Chain::new(Vec2::new(400.0, 300.0), &ChainConfig::default()).unwrap();
    let config = SolverConfig::new();
    for frame in 0..120 {
        chain.step(&pointer_path(frame), &config, &mut NoOpStepObserver);
    }
    let projector = PoseProjector::default();
    let mut poses = Vec::with_capacity(chain.len());

    c.bench_function("project_30_segments", |b| {
        b.iter(|| {
            projector.project_into(&chain, &mut poses);
            poses.len()
        });
    });
}

criterion_group!(benches, bench_chain_simulation, bench_long_chain, bench_pose_projection);
criterion_main!(benches);
