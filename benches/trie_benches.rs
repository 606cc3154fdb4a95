/// Benchmarks for the positional trie over word lists of increasing size.
/// Removal is dominated by renumbering, so it scales with the number of stored occurrences.
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use positional_radix::PositionalTrie;

const SIZES: [usize; 3] = [1 << 8, 1 << 11, 1 << 14];

fn gen_words(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(count as u64);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(2..10);
            (0..len).map(|_| rng.gen_range(b'a'..b'h') as char).collect()
        })
        .collect()
}

fn build(words: &[String]) -> PositionalTrie<String> {
    words.iter().map(String::as_str).collect()
}

pub fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for size in SIZES.iter() {
        let words = gen_words(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &words, |b, words| {
            b.iter(|| black_box(build(words)))
        });
    }
    group.finish();
}

pub fn find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    group.throughput(Throughput::Elements(1));
    for size in SIZES.iter() {
        let words = gen_words(*size);
        let trie = build(&words);
        let mut rng = StdRng::seed_from_u64(7);
        group.bench_with_input(BenchmarkId::from_parameter(size), &words, |b, words| {
            b.iter(|| {
                let word = &words[rng.gen_range(0..words.len())];
                black_box(trie.find_all(word.as_str()))
            })
        });
    }
    group.finish();
}

pub fn remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    group.throughput(Throughput::Elements(1));
    for size in SIZES.iter() {
        let words = gen_words(*size);
        let trie = build(&words);
        // The earliest word forces every later position to shift
        let first = words[0].clone();
        group.bench_with_input(BenchmarkId::from_parameter(size), &trie, |b, trie| {
            b.iter_batched(
                || trie.clone(),
                |mut trie| black_box(trie.remove(first.as_str())),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

pub fn to_vec(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_vec");
    for size in SIZES.iter() {
        let trie = build(&gen_words(*size));
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &trie, |b, trie| {
            b.iter(|| black_box(trie.to_vec()))
        });
    }
    group.finish();
}

criterion_group!(benches, insert, find, remove, to_vec);
criterion_main!(benches);
