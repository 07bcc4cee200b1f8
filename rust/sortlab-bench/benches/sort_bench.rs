//! Criterion benchmarks for the five sorting algorithms.
//!
//! Quadratic sorts stop at 1000 elements; merge and radix sort continue to
//! 10000 to show the complexity gap.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sortlab_bench::{ascending, descending, pseudo_random};
use sortlab_core::{bubble_sort, insertion_sort, merge_sort, radix_sort, selection_sort};

const QUADRATIC_SIZES: [usize; 3] = [10, 100, 1000];
const LINEARITHMIC_SIZES: [usize; 4] = [10, 100, 1000, 10000];

fn bench_in_place(c: &mut Criterion, name: &str, sort: fn(&mut [i64]) -> &mut [i64]) {
    let mut group = c.benchmark_group(name);

    for size in QUADRATIC_SIZES {
        let data = pseudo_random(size, 100_000);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter_batched(
                || data.clone(),
                |mut xs| {
                    sort(black_box(&mut xs));
                    xs
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_bubble(c: &mut Criterion) {
    bench_in_place(c, "bubble_sort", bubble_sort::<i64>);
}

fn bench_insertion(c: &mut Criterion) {
    bench_in_place(c, "insertion_sort", insertion_sort::<i64>);
}

fn bench_selection(c: &mut Criterion) {
    bench_in_place(c, "selection_sort", selection_sort::<i64>);
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_sort");

    for size in LINEARITHMIC_SIZES {
        let data = pseudo_random(size, 100_000);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| merge_sort(black_box(data)));
        });
    }

    group.finish();
}

fn bench_radix(c: &mut Criterion) {
    let mut group = c.benchmark_group("radix_sort");

    for size in LINEARITHMIC_SIZES {
        let data = pseudo_random(size, 100_000);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| radix_sort(black_box(data)));
        });
    }

    group.finish();
}

/// Best and worst case inputs for insertion sort, whose cost depends on
/// presortedness.
fn bench_insertion_presorted(c: &mut Criterion) {
    let size = 1000;
    let mut group = c.benchmark_group("insertion_sort_order");
    group.throughput(Throughput::Elements(size as u64));

    for (label, data) in [("ascending", ascending(size)), ("descending", descending(size))] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &data, |b, data| {
            b.iter_batched(
                || data.clone(),
                |mut xs| {
                    insertion_sort(black_box(&mut xs));
                    xs
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_bubble,
    bench_insertion,
    bench_selection,
    bench_merge,
    bench_radix,
    bench_insertion_presorted
);
criterion_main!(benches);
