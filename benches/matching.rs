//! Benchmarks for the round pipeline.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- full_round
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main,
    BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use reciprocal_matcher::engine::{
    apply_capacity_limits, calculate_capacity_limits, generate_optimal_pairings,
    group_by_category,
};
use reciprocal_matcher::types::{Category, Participant, RoundReceipt};
use reciprocal_matcher::compute_round_pairings;

// ============================================================================
// HELPER FUNCTIONS - Deterministic pool generation
// ============================================================================

/// Generate a seeded pool with a skewed category mix.
fn generate_pool(count: usize, seed: u64) -> Vec<Participant> {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            // TopB over-represented so the limiter has work to do
            let category = match rng.gen_range(0..10) {
                0..=1 => Category::TopA,
                2..=5 => Category::TopB,
                6..=7 => Category::BottomA,
                _ => Category::BottomB,
            };
            Participant::new(i as u64 + 1, category, rng.gen_range(0..1_000_000))
        })
        .collect()
}

// ============================================================================
// BENCHMARK: Full round
// ============================================================================

fn bench_full_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_round");
    group.measurement_time(Duration::from_secs(5));

    for size in [100usize, 1_000, 10_000] {
        let participants = generate_pool(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &participants, |b, pool| {
            b.iter(|| black_box(compute_round_pairings(black_box(pool))))
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Pipeline stages
// ============================================================================

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let participants = generate_pool(10_000, 7);

    group.bench_function("group_by_category", |b| {
        b.iter(|| black_box(group_by_category(black_box(&participants))))
    });

    group.bench_function("limit_and_pair", |b| {
        b.iter_batched(
            || group_by_category(&participants),
            |grouped| {
                let plan = calculate_capacity_limits(&grouped);
                black_box(generate_optimal_pairings(apply_capacity_limits(grouped, &plan)))
            },
            BatchSize::SmallInput,
        );
    });

    let pairings = compute_round_pairings(&participants);
    group.bench_function("receipt_root", |b| {
        b.iter(|| black_box(RoundReceipt::compute_root(black_box(&pairings))))
    });

    group.finish();
}

criterion_group!(benches, bench_full_round, bench_stages);
criterion_main!(benches);
