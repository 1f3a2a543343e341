//! Basic benchmarks for the `fixed_pool` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use fixed_pool::FixedPool;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

type TestItem = usize;
const TEST_VALUE: TestItem = 1024;
const CAPACITY: usize = 128;

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_basic");

    group.bench_function("build_empty", |b| {
        b.iter(|| drop(black_box(FixedPool::<TestItem, CAPACITY>::new())));
    });

    group.bench_function("insert_until_full", |b| {
        b.iter(|| {
            let mut pool = FixedPool::<TestItem, CAPACITY>::new();

            while let Ok(index) = pool.insert(black_box(TEST_VALUE)) {
                _ = black_box(index);
            }

            pool
        });
    });

    group.bench_function("get", |b| {
        let mut pool = FixedPool::<TestItem, CAPACITY>::new();
        let index = pool.insert(TEST_VALUE).expect("pool is empty");

        b.iter(|| _ = black_box(pool.get(black_box(index))));
    });

    group.bench_function("index_of_last_slot", |b| {
        let mut pool = FixedPool::<TestItem, CAPACITY>::new();

        let mut last_index = 0;
        while let Ok(index) = pool.insert(TEST_VALUE) {
            last_index = index;
        }

        b.iter(|| {
            let item = pool.get(black_box(last_index)).expect("slot is occupied");
            _ = black_box(pool.index_of(item));
        });
    });

    group.bench_function("remove_reinsert_first_slot", |b| {
        let mut pool = FixedPool::<TestItem, CAPACITY>::new();

        while pool.insert(TEST_VALUE).is_ok() {}

        b.iter(|| {
            pool.remove(0).expect("slot 0 is occupied");
            _ = black_box(pool.insert(black_box(TEST_VALUE)));
        });
    });

    group.finish();
}
