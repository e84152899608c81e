use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use lightsout_core::*;

const SIZES: [Coord; 4] = [5, 10, 20, 40];

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for size in SIZES {
        let grid = ScrambledGridGenerator::new(u64::from(size))
            .generate(BoardConfig::new_unchecked((size, size), 0.5));
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| solve(black_box(grid)).unwrap())
        });
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for size in SIZES {
        let config = BoardConfig::new_unchecked((size, size), BoardConfig::DEFAULT_CHANCE_ON);
        group.bench_with_input(BenchmarkId::new("random", size), &config, |b, &config| {
            b.iter(|| RandomGridGenerator::new(7).generate(black_box(config)))
        });
        group.bench_with_input(BenchmarkId::new("scrambled", size), &config, |b, &config| {
            b.iter(|| ScrambledGridGenerator::new(7).generate(black_box(config)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve, bench_generate);
criterion_main!(benches);
