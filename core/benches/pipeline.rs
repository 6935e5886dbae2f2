use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    hint::black_box,
};

use criterion::{criterion_group, criterion_main, Criterion};
use lazyseq_core::prelude::*;

#[inline(never)]
fn fused_chain(n: i32) -> u64 {
    range(0, n)
        .filter(|v| v % 3 != 0)
        .map(|item| {
            let mut s = DefaultHasher::new();
            item.hash(&mut s);
            s.finish()
        })
        .reduce(0, |acc, item, _| acc ^ item)
        .run()
}

#[inline(never)]
fn iterator_chain(n: i32) -> u64 {
    (0..=n)
        .filter(|v| v % 3 != 0)
        .map(|item| {
            let mut s = DefaultHasher::new();
            item.hash(&mut s);
            s.finish()
        })
        .fold(0, |acc, item| acc ^ item)
}

fn pipeline(c: &mut Criterion) {
    c.bench_function("sequence", |b| b.iter(|| fused_chain(black_box(4096))));
    c.bench_function("iterator", |b| b.iter(|| iterator_chain(black_box(4096))));
    c.bench_function("chunked", |b| {
        b.iter(|| {
            range(0, black_box(4096))
                .chunk(64)
                .map(|seq| seq.map(|batch| batch.len()).reduce(0, |acc, n, _| acc + n).run())
        })
    });
}

criterion_group!(benches, pipeline);
criterion_main!(benches);
