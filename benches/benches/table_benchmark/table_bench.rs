use std::{collections::HashMap, hint::black_box, num::NonZeroUsize};

use chaintable::{hash, HashTable};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};

const SIZES: &[usize] = &[256, 1_024, 8_192];
/// Число бакетов относительно числа ключей: от редких цепочек до длинных.
const LOAD_FACTORS: &[usize] = &[1, 4, 16];

fn keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("key:{i:08}")).collect()
}

fn filled(
    capacity: usize,
    keys: &[String],
) -> HashTable {
    let mut t = HashTable::new(capacity).unwrap();
    for k in keys {
        t.insert(k, k).unwrap();
    }
    t
}

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/hash");
    let modulus = NonZeroUsize::new(1_024).unwrap();

    for len in [8usize, 64, 512] {
        let key = "k".repeat(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &key, |b, key| {
            b.iter(|| hash(black_box(key), modulus));
        });
    }

    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/insert");

    for &n in SIZES {
        let keys = keys(n);
        for &lf in LOAD_FACTORS {
            let capacity = (n / lf).max(1);
            group.throughput(Throughput::Elements(n as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("load_{lf}"), n),
                &keys,
                |b, keys| {
                    b.iter(|| black_box(filled(capacity, keys)));
                },
            );
        }
    }

    group.bench_function("std_hashmap/8192", |b| {
        let keys = keys(8_192);
        b.iter(|| {
            let mut m = HashMap::new();
            for k in &keys {
                m.insert(k.clone(), k.clone());
            }
            black_box(m)
        });
    });

    group.finish();
}

fn bench_retrieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/retrieve");

    for &n in SIZES {
        let keys = keys(n);
        for &lf in LOAD_FACTORS {
            let table = filled((n / lf).max(1), &keys);
            group.throughput(Throughput::Elements(n as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("load_{lf}"), n),
                &keys,
                |b, keys| {
                    b.iter(|| {
                        for k in keys {
                            black_box(table.retrieve(k));
                        }
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/remove");

    for &n in SIZES {
        let keys = keys(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter_batched(
                || filled(n, keys),
                |mut t| {
                    for k in keys {
                        t.remove(k);
                    }
                    black_box(t)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/resize");

    for &n in SIZES {
        let table = filled((n / 4).max(1), &keys(n));
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &table, |b, table| {
            b.iter(|| black_box(table.resize().unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_hash,
    bench_insert,
    bench_retrieve,
    bench_remove,
    bench_resize
);
criterion_main!(benches);
