//! Criterion benchmarks for grid maintenance operations.

use cellmd_bench::{reference_profile, CUTOFF};
use cellmd_core::{ParticleType, Vec3};
use cellmd_grid::LinkedCellGrid;
use cellmd_test_utils::random_positions;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_restructure_unmoved(c: &mut Criterion) {
    c.bench_function("restructure_unmoved_4k", |b| {
        let mut domain = reference_profile(42);
        domain.restructure();
        b.iter(|| domain.restructure());
    });
}

fn bench_restructure_after_drift(c: &mut Criterion) {
    c.bench_function("restructure_drift_4k", |b| {
        let mut domain = reference_profile(42);
        domain.restructure();
        b.iter(|| {
            // Nudge every particle a third of a cell; some change cells.
            domain.for_each(|p| p.position.x += CUTOFF / 3.0);
            domain.restructure();
        });
    });
}

fn bench_emplace(c: &mut Criterion) {
    let extent = Vec3::new(50.0, 50.0, 50.0);
    let positions = random_positions(9, Vec3::ZERO, extent, 4_000);
    c.bench_function("emplace_4k", |b| {
        b.iter(|| {
            let mut grid = LinkedCellGrid::new(Vec3::ZERO, extent, CUTOFF).unwrap();
            grid.reserve(positions.len());
            for &p in &positions {
                grid.emplace(p, Vec3::ZERO, 1.0, ParticleType(0));
            }
            black_box(&grid);
        });
    });
}

criterion_group!(
    benches,
    bench_restructure_unmoved,
    bench_restructure_after_drift,
    bench_emplace
);
criterion_main!(benches);
