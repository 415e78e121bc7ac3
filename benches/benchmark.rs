use std::collections::BTreeSet;

use book_recommender::{Item, Recommender};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const WORDS: &[&str] = &[
    "dragon", "wizard", "empire", "detective", "murder", "startup", "habit", "planet", "desert",
    "rebellion", "journey", "kingdom", "science", "history", "memoir", "war", "love", "island",
    "hacker", "future", "society", "justice", "magic", "monster", "village", "ocean", "storm",
];

/// deterministic synthetic catalog
fn synthetic_catalog(n: usize) -> Vec<Item> {
    let mut state: u32 = 0x1234_5678;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state as usize
    };
    (0..n)
        .map(|i| {
            let description: Vec<&str> = (0..12).map(|_| WORDS[next() % WORDS.len()]).collect();
            Item {
                id: i as u64,
                title: format!("Book {i}"),
                author: "Bench".to_string(),
                cover_image_url: String::new(),
                category: WORDS[next() % WORDS.len()].to_string(),
                rating: 4.0,
                popularity: (next() % 1000) as u64,
                description: description.join(" "),
            }
        })
        .collect()
}

fn recommend_benchmark(c: &mut Criterion) {
    let recommender = <Recommender>::default();
    let favorites: BTreeSet<u64> = BTreeSet::from([1, 5, 9]);

    let mut group = c.benchmark_group("recommend");
    for n in [50usize, 200, 800] {
        let items = synthetic_catalog(n);
        group.bench_with_input(BenchmarkId::new("personalized", n), &items, |b, items| {
            b.iter(|| recommender.recommend_for(items, &favorites))
        });
        group.bench_with_input(BenchmarkId::new("cold_start", n), &items, |b, items| {
            b.iter(|| recommender.recommend_for(items, &BTreeSet::new()))
        });
    }
    group.finish();
}

criterion_group!(benches, recommend_benchmark);
criterion_main!(benches);
