use chartrie::trie::Trie;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{distributions::Alphanumeric, thread_rng, Rng};

fn random_words(population: usize, max_len: usize) -> Vec<String> {
    (0..population)
        .map(|_| {
            thread_rng()
                .sample_iter(&Alphanumeric)
                .take(thread_rng().gen_range(1..=max_len))
                .map(char::from)
                .collect()
        })
        .collect()
}

fn make_trie(words: &[String]) -> Trie {
    let mut trie = Trie::new();
    for word in words {
        trie.add(word);
    }
    trie
}

fn trie_add(c: &mut Criterion) {
    let words = random_words(1000, 32);
    c.bench_function("trie add", |b| b.iter(|| make_trie(&words)));
}

fn trie_search(c: &mut Criterion) {
    let words = random_words(1000, 32);
    let trie = make_trie(&words);
    c.bench_function("trie search", |b| {
        b.iter(|| words.iter().filter(|w| trie.search(w)).count())
    });
}

fn trie_starts_with(c: &mut Criterion) {
    let words = random_words(1000, 32);
    let trie = make_trie(&words);
    c.bench_function("trie starts_with", |b| {
        b.iter(|| words.iter().filter(|w| trie.starts_with(w)).count())
    });
}

fn trie_round_trip(c: &mut Criterion) {
    let words = random_words(1000, 32);
    let trie = make_trie(&words);
    c.bench_function("trie repr round trip", |b| {
        b.iter_batched(
            || trie.to_repr(),
            |repr| Trie::from_repr(repr).expect("well formed"),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, trie_add, trie_search, trie_starts_with, trie_round_trip);
criterion_main!(benches);
