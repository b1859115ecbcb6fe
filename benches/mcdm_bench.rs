//! Criterion benchmarks for u-mcdm rankers.
//!
//! Uses seeded random decision matrices to measure the ranking pipeline
//! across problem sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_mcdm::fuzzy::Tfn;
use u_mcdm::topsis::{CrispTopsis, FuzzyTopsis, FuzzyTopsisConfig};

const CRITERIA: usize = 8;
const DECISION_MAKERS: usize = 4;

fn random_tfn<R: Rng>(rng: &mut R, low: f64, high: f64) -> Tfn {
    let mut c = [
        rng.random_range(low..high),
        rng.random_range(low..high),
        rng.random_range(low..high),
    ];
    c.sort_by(f64::total_cmp);
    Tfn::new(c[0], c[1], c[2]).unwrap()
}

fn criteria() -> Vec<bool> {
    (0..CRITERIA).map(|j| j % 3 != 1).collect()
}

type FuzzyContribution = (Vec<Vec<Tfn>>, Vec<Tfn>);

fn fuzzy_contributions(alternatives: usize) -> Vec<FuzzyContribution> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..DECISION_MAKERS)
        .map(|_| {
            let matrix = (0..alternatives)
                .map(|_| (0..CRITERIA).map(|_| random_tfn(&mut rng, 1.0, 10.0)).collect())
                .collect();
            let weights = (0..CRITERIA).map(|_| random_tfn(&mut rng, 0.0, 1.0)).collect();
            (matrix, weights)
        })
        .collect()
}

fn fuzzy_engine(config: FuzzyTopsisConfig, contributions: &[FuzzyContribution]) -> FuzzyTopsis {
    let mut engine = FuzzyTopsis::new(&criteria(), config).unwrap();
    for (matrix, weights) in contributions {
        engine
            .add_decision_maker(matrix.clone(), weights.clone())
            .unwrap();
    }
    engine
}

fn bench_fuzzy(c: &mut Criterion, name: &str, config: FuzzyTopsisConfig) {
    let mut group = c.benchmark_group(name);
    group.sample_size(20);

    for alternatives in [10, 100, 1000] {
        let contributions = fuzzy_contributions(alternatives);
        group.bench_with_input(
            BenchmarkId::from_parameter(alternatives),
            &contributions,
            |b, contributions| {
                let mut engine = fuzzy_engine(config.clone(), contributions);
                b.iter(|| black_box(engine.evaluate(false).unwrap()));
            },
        );
    }
    group.finish();
}

fn bench_fuzzy_chen(c: &mut Criterion) {
    bench_fuzzy(c, "fuzzy_topsis_chen", FuzzyTopsisConfig::chen());
}

fn bench_fuzzy_yuen(c: &mut Criterion) {
    bench_fuzzy(c, "fuzzy_topsis_yuen", FuzzyTopsisConfig::yuen());
}

fn bench_crisp(c: &mut Criterion) {
    let mut group = c.benchmark_group("crisp_topsis");
    group.sample_size(20);

    for alternatives in [10, 100, 1000] {
        let mut rng = StdRng::seed_from_u64(42);
        let matrix: Vec<Vec<f64>> = (0..alternatives)
            .map(|_| (0..CRITERIA).map(|_| rng.random_range(1.0..10.0)).collect())
            .collect();
        let weights: Vec<f64> = (0..CRITERIA).map(|_| rng.random_range(0.1..1.0)).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(alternatives),
            &(matrix, weights),
            |b, (matrix, weights)| {
                let mut ranker = CrispTopsis::new(&criteria()).unwrap();
                ranker
                    .add_decision_maker(matrix.clone(), weights.clone())
                    .unwrap();
                b.iter(|| black_box(ranker.evaluate(false).unwrap()));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fuzzy_chen, bench_fuzzy_yuen, bench_crisp);
criterion_main!(benches);
