//! Benchmarks for board evolution.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use wolfram_ca::{
    compute::{Board, Evolver},
    schema::{EvolutionMode, SeedRng, SimulationConfig},
};

fn bench_batch_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_fill");

    for size in [64, 256, 1024] {
        let config = SimulationConfig {
            num_cells: size,
            num_time: size,
            rule: 110,
            ..Default::default()
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut board = Board::from_seed(config, &mut SeedRng::new(0));
                    Evolver::new(EvolutionMode::Batch).run(black_box(&mut board));
                    board
                });
            },
        );
    }

    group.finish();
}

fn bench_scroll_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_step");

    for width in [64, 1024, 16384] {
        let config = SimulationConfig {
            num_cells: width,
            num_time: 64,
            rule: 110,
            mode: EvolutionMode::Scroll,
            ..Default::default()
        };

        let mut board = Board::from_seed(&config, &mut SeedRng::new(0));
        let mut evolver = Evolver::new(EvolutionMode::Scroll);

        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, _| {
            b.iter(|| {
                evolver.step(black_box(&mut board));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_batch_fill, bench_scroll_step);
criterion_main!(benches);
