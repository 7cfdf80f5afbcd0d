//! Benchmarks for floor generation and reachability repair.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gloomwell::data::GameConfig;
use gloomwell::items::LootFactory;
use gloomwell::world::generation::scatter::scatter_floor;
use gloomwell::world::{flood_fill, generate, repair, MAX_FLOORS};
use std::hint::black_box;

// =============================================================================
// Generation
// =============================================================================

fn benchmark_generate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("generate");

    for floor in 0..MAX_FLOORS {
        group.bench_with_input(BenchmarkId::new("floor", floor), &floor, |bencher, &floor| {
            let mut loot = LootFactory::seeded(42);
            bencher.iter(|| black_box(generate(floor, &mut loot)));
        });
    }

    group.finish();
}

// =============================================================================
// Reachability
// =============================================================================

fn benchmark_repair(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("repair");
    let config = GameConfig::default();

    for floor in [2, 5, 9] {
        let scattered = scatter_floor(floor, &config, &mut LootFactory::seeded(42));
        group.bench_with_input(BenchmarkId::new("scattered", floor), &scattered, |bencher, level| {
            bencher.iter(|| {
                let mut level = level.clone();
                black_box(repair(&mut level))
            });
        });
    }

    let level = generate(5, &mut LootFactory::seeded(42)).ok();
    if let Some(level) = level {
        group.bench_function("flood_fill", |bencher| {
            bencher.iter(|| black_box(flood_fill(&level)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_generate, benchmark_repair);
criterion_main!(benches);
