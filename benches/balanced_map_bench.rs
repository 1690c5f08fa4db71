//! Benchmark for BalancedMap vs standard BTreeMap.
//!
//! Compares the AVL-backed BalancedMap against Rust's standard BTreeMap for
//! insertion, lookup, removal and full traversal.

use balanced_map::BalancedMap;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;
use std::hint::black_box;

/// Deterministic scatter of `0..size` so inserts do not arrive sorted.
fn scattered_keys(size: i32) -> Vec<i32> {
    (0..size).map(|index| (index * 7919) % size).collect()
}

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [100, 1000, 10000] {
        let keys = scattered_keys(size);

        group.bench_with_input(BenchmarkId::new("BalancedMap", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut map = BalancedMap::new();
                for &key in keys {
                    map.insert(black_box(key), black_box(key * 2));
                }
                black_box(map)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut map = BTreeMap::new();
                for &key in keys {
                    map.insert(black_box(key), black_box(key * 2));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// search Benchmark
// =============================================================================

fn benchmark_search(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("search");

    for size in [100, 1000, 10000] {
        let mut balanced_map = BalancedMap::new();
        let mut standard_map = BTreeMap::new();
        for key in scattered_keys(size) {
            balanced_map.insert(key, key * 2);
            standard_map.insert(key, key * 2);
        }

        group.bench_with_input(BenchmarkId::new("BalancedMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0i64;
                for key in 0..size {
                    if let Some(&value) = balanced_map.search(&black_box(key)) {
                        sum += i64::from(value);
                    }
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0i64;
                for key in 0..size {
                    if let Some(&value) = standard_map.get(&black_box(key)) {
                        sum += i64::from(value);
                    }
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// remove Benchmark
// =============================================================================

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in [100, 1000, 10000] {
        let keys = scattered_keys(size);
        let mut balanced_map = BalancedMap::new();
        let mut standard_map = BTreeMap::new();
        for &key in &keys {
            balanced_map.insert(key, key);
            standard_map.insert(key, key);
        }

        group.bench_with_input(BenchmarkId::new("BalancedMap", size), &keys, |bencher, keys| {
            bencher.iter_batched(
                || balanced_map.clone(),
                |mut map| {
                    for key in keys {
                        black_box(map.remove(key));
                    }
                    map
                },
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
            bencher.iter_batched(
                || standard_map.clone(),
                |mut map| {
                    for key in keys {
                        black_box(map.remove(key));
                    }
                    map
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// traversal Benchmark
// =============================================================================

fn benchmark_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traversal");

    for size in [100, 1000, 10000] {
        let mut balanced_map = BalancedMap::new();
        for key in scattered_keys(size) {
            balanced_map.insert(key, key);
        }

        group.bench_with_input(BenchmarkId::new("in_order", size), &size, |bencher, _| {
            bencher.iter(|| {
                let total: i32 = balanced_map.in_order().map(|(_, value)| *value).sum();
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("pre_order", size), &size, |bencher, _| {
            bencher.iter(|| {
                let total: i32 = balanced_map.pre_order().map(|(_, value)| *value).sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_search,
    benchmark_remove,
    benchmark_traversal
);

criterion_main!(benches);
