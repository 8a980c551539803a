use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tf_idf_recommender::{build_index_with, Document, IndexConfig, SimilarityMode};

const WORDS: &[&str] = &[
    "crew", "heist", "ocean", "planet", "detective", "island", "robot", "war", "love", "storm",
    "king", "desert", "murder", "ship", "family", "school", "dragon", "city", "train", "ghost",
];

/// Synthetic synopses, deterministic
fn synthetic_corpus(n: usize) -> Vec<Document<usize>> {
    let mut state = 0x9e37_79b9u32;
    (0..n)
        .map(|i| {
            let text: Vec<&str> = (0..24)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 17;
                    state ^= state << 5;
                    WORDS[state as usize % WORDS.len()]
                })
                .collect();
            Document::new(i, text.join(" "))
        })
        .collect()
}

fn build_and_recommend_benchmark(c: &mut Criterion) {
    let docs = synthetic_corpus(2_000);

    for (name, config) in [
        ("build_eager", IndexConfig::default()),
        ("build_eager_parallel", IndexConfig::default().with_parallel(true)),
        ("build_on_demand", IndexConfig::default().with_mode(SimilarityMode::OnDemand)),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| build_index_with(black_box(&docs), &config).map(|h| h.len()))
        });
    }

    let eager = build_index_with(&docs, &IndexConfig::default()).expect("index builds");
    let on_demand = build_index_with(&docs, &IndexConfig::default().with_mode(SimilarityMode::OnDemand))
        .expect("index builds");

    c.bench_function("recommend_eager", |b| {
        b.iter(|| eager.recommend(black_box(&42), 10))
    });
    c.bench_function("recommend_on_demand", |b| {
        b.iter(|| on_demand.recommend(black_box(&42), 10))
    });
}

criterion_group!(benches, build_and_recommend_benchmark);
criterion_main!(benches);
