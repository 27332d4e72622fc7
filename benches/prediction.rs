//! Prediction benchmarks for hedonic.
//!
//! Benchmarks cover:
//! - The scalar root solver in isolation
//! - Single-listing prediction (derive + solve)
//! - Sequential vs parallel batch prediction at several batch sizes
//!
//! # Running benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! HTML reports are generated in `target/criterion/`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;

use hedonic::features::{RawListing, FEATURE_NAMES};
use hedonic::model::{PriceModel, LOG_TARGET_FEATURE};
use hedonic::solver::solve_price;

// =============================================================================
// Benchmark Data Setup
// =============================================================================

fn bench_model() -> PriceModel {
    let names: Vec<String> = FEATURE_NAMES
        .iter()
        .map(|s| s.to_string())
        .chain([LOG_TARGET_FEATURE.to_string()])
        .collect();
    let coefficients = vec![
        120.0, 8500.0, 12750.0, 45.0, 30000.0, -20000.0, 12000.0, -350.0, -1500.0, 22.5, 15000.0,
        18000.0,
    ];
    PriceModel::new(names, coefficients, -65_000.0).expect("valid bench model")
}

/// Generate random listings with a fixed seed for reproducible runs.
fn generate_listings(count: usize, seed: u64) -> Vec<RawListing> {
    let mut rng = StdRng::seed_from_u64(seed);
    let locations = ["city", "rural", "suburb", "waterfront"];

    (0..count)
        .map(|_| RawListing {
            size_sqft: rng.gen_range(400.0..5000.0),
            bedrooms: rng.gen_range(0..6) as f64,
            bathrooms: rng.gen_range(1..4) as f64,
            year_built: rng.gen_range(1900.0..2026.0),
            location: locations.choose(&mut rng).unwrap().to_string(),
        })
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver");

    group.bench_function("typical_price_scale", |b| {
        b.iter(|| solve_price(black_box(200_000.0), black_box(25_000.0)))
    });
    group.bench_function("zero_log_coef", |b| {
        b.iter(|| solve_price(black_box(250_000.0), black_box(0.0)))
    });
    group.bench_function("clamped_guess", |b| {
        b.iter(|| solve_price(black_box(-50_000.0), black_box(80_000.0)))
    });

    group.finish();
}

fn bench_single(c: &mut Criterion) {
    let model = bench_model();
    let listing = RawListing {
        size_sqft: 1000.0,
        bedrooms: 2.0,
        bathrooms: 1.0,
        year_built: 2000.0,
        location: "city".to_string(),
    };

    c.bench_function("predict/single", |b| {
        b.iter(|| model.predict(black_box(&listing)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let model = bench_model();
    let mut group = c.benchmark_group("predict_batch");

    for &size in &[10usize, 100, 1_000, 10_000] {
        let listings = generate_listings(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &listings, |b, l| {
            b.iter(|| model.predict_batch(black_box(l)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &listings, |b, l| {
            b.iter(|| model.par_predict_batch(black_box(l)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solver, bench_single, bench_batch);
criterion_main!(benches);
