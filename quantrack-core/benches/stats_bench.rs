//! Criterion benchmarks for the tracker hot paths.
//!
//! Benchmarks:
//! 1. Median / MAD over a full series
//! 2. Outlier rejection
//! 3. Lookback construction
//! 4. Batch exceedance tracking
//! 5. Controller steps

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use quantrack_core::{
    compute_quantile, compute_quantile_obs, create_lookback, log_transform, median,
    median_absolute_deviation, remove_outliers, AdaptiveQuantileController, ControllerParams,
    Observation,
};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_observations(n: usize) -> Vec<Observation> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut price = 100.0_f64;
    (0..n)
        .map(|i| {
            price *= 1.0 + rng.gen_range(-0.02..0.02);
            Observation::new(i as u64, price)
        })
        .collect()
}

fn bench_robust(c: &mut Criterion) {
    let mut group = c.benchmark_group("robust");
    for n in [1_000usize, 10_000] {
        let prices: Vec<f64> = make_observations(n).iter().map(|o| o.price).collect();
        group.bench_with_input(BenchmarkId::new("median", n), &prices, |b, p| {
            b.iter(|| median(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("mad", n), &prices, |b, p| {
            b.iter(|| median_absolute_deviation(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("remove_outliers", n), &prices, |b, p| {
            b.iter(|| remove_outliers(black_box(p)))
        });
    }
    group.finish();
}

fn bench_windows(c: &mut Criterion) {
    let logged = log_transform(&make_observations(10_000)).unwrap();
    c.bench_function("create_lookback_10k_k50", |b| {
        b.iter(|| create_lookback(black_box(&logged), 50).unwrap())
    });

    let mut rng = StdRng::seed_from_u64(7);
    let rows: Vec<_> = create_lookback(&logged, 50)
        .unwrap()
        .into_iter()
        .map(|r| {
            let flag = rng.gen_bool(0.1);
            r.with_price_smaller(flag)
        })
        .collect();
    c.bench_function("compute_quantile_obs_10k_bt100", |b| {
        b.iter(|| compute_quantile_obs(black_box(&rows), 100).unwrap())
    });
    c.bench_function("compute_quantile_k50", |b| {
        let window = &rows[500].log_prices_lookback;
        b.iter(|| compute_quantile(black_box(window), 0.1).unwrap())
    });
}

fn bench_controller(c: &mut Criterion) {
    let ctl = AdaptiveQuantileController::new(ControllerParams {
        q_target: 0.1,
        speed: 0.05,
        pct_target_min: 0.01,
        pct_target_max: 0.5,
    })
    .unwrap();
    let rates: Vec<f64> = (0..10_000).map(|i| (i % 17) as f64 / 17.0).collect();
    c.bench_function("controller_10k_steps", |b| {
        b.iter(|| {
            let mut state = ctl.initial_state(0.1).unwrap();
            for &r in &rates {
                state = ctl.apply(state, black_box(r));
            }
            state
        })
    });
}

criterion_group!(benches, bench_robust, bench_windows, bench_controller);
criterion_main!(benches);
