//! Benchmark: many sentence-sized pairs, the shape of a revision alignment run.
//!
//! Run with:
//! `cargo bench --bench large_tables`
//! `cargo bench --bench large_tables --features parallel`

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use token_lcs::batch::lcs_batch;

fn random_sentence(rng: &mut StdRng) -> Vec<String> {
    const VOCAB: &[&str] = &[
        "we", "show", "that", "the", "proposed", "method", "improves", "on", "prior", "work",
        "results", "in", "table", "1", ",", ".",
    ];
    let len = rng.gen_range(8..40);
    (0..len)
        .map(|_| VOCAB[rng.gen_range(0..VOCAB.len())].to_string())
        .collect()
}

fn bench_sentence_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs_sentence_batch");
    for &pairs in &[100usize, 1_000] {
        group.bench_function(format!("pairs_{pairs}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    (0..pairs)
                        .map(|_| (random_sentence(&mut rng), random_sentence(&mut rng)))
                        .collect::<Vec<_>>()
                },
                |batch| criterion::black_box(lcs_batch(&batch)),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sentence_batch);
criterion_main!(benches);
