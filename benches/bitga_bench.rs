//! Criterion benchmarks for the bitstring GA.
//!
//! Measures full runs on the reference landscape and the raw operators.

use bitga::ga::operators::{mutate, random_point_crossover, uniform_crossover};
use bitga::ga::{GaEngine, Params};
use bitga::landscape::PiecewiseLandscape;
use bitga::random::create_rng;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn run_to_end(params: &Params) -> usize {
    let mut engine = GaEngine::new(PiecewiseLandscape::new(), params.clone()).unwrap();
    engine.initialize().unwrap();
    engine.evolve().unwrap().filter_map(Result::ok).count()
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    group.sample_size(20);

    for tag in ["fitness-proportional", "uniform"] {
        for &pop in &[20, 100] {
            let params = Params::default()
                .with_seed(42)
                .with_population_size(pop)
                .with_iterations(50)
                .with_mutation(0.05)
                .with_selection(tag)
                .with_elitism(true)
                .with_trace(false);
            group.bench_with_input(BenchmarkId::new(tag, pop), &params, |b, p| {
                b.iter(|| black_box(run_to_end(black_box(p))))
            });
        }
    }
    group.finish();
}

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");
    let mut rng = create_rng(7);

    group.bench_function("point_crossover", |b| {
        b.iter(|| {
            random_point_crossover(black_box(341), black_box(682), 10, &mut rng)
        })
    });
    group.bench_function("uniform_crossover", |b| {
        b.iter(|| {
            uniform_crossover(black_box(341), black_box(682), 10, &mut rng)
        })
    });
    group.bench_function("mutate", |b| {
        b.iter(|| mutate(black_box(341), None, 10, &mut rng))
    });
    group.finish();
}

criterion_group!(benches, bench_engine, bench_operators);
criterion_main!(benches);
