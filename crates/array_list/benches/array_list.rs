use std::hint::black_box;

use array_list::{ArrayList, Sequence};
use bench::{apply_medium_runtime_config, apply_small_runtime_config, default_rng, random_slots, random_window};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

const SIZES: [usize; 4] = [1_000, 4_000, 16_000, 64_000];
const VALUE_BOUND: i64 = 1_000;
const WINDOWS_PER_SIZE: usize = 32;

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_list_filter_even");
    apply_medium_runtime_config(&mut group);

    for &size in &SIZES {
        let mut rng = default_rng();
        let list = ArrayList::from(random_slots(&mut rng, size, VALUE_BOUND));

        group.bench_with_input(BenchmarkId::new("cursor", size), &list, |b, list| {
            b.iter_batched(
                || list.clone(),
                |mut list| {
                    let mut cursor = list.cursor();
                    while cursor.has_next() {
                        let even = matches!(cursor.next(), Ok(Some(v)) if v % 2 == 0);
                        if even {
                            let _ = cursor.remove();
                        }
                    }
                    black_box(list)
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("indexed", size), &list, |b, list| {
            b.iter_batched(
                || list.clone(),
                |mut list| {
                    let mut index = 0;
                    while index < list.len() {
                        if matches!(list.get(index), Ok(Some(v)) if v % 2 == 0) {
                            let _ = list.remove(index);
                        } else {
                            index += 1;
                        }
                    }
                    black_box(list)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_window_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_list_window_clear");
    apply_small_runtime_config(&mut group);

    for &size in &SIZES {
        let mut rng = default_rng();
        let list = ArrayList::from(random_slots(&mut rng, size, VALUE_BOUND));
        let windows: Vec<_> = (0..WINDOWS_PER_SIZE)
            .map(|_| random_window(&mut rng, size))
            .collect();

        group.bench_with_input(BenchmarkId::new("sub_list", size), &list, |b, list| {
            b.iter_batched(
                || list.clone(),
                |mut list| {
                    for &(from, to) in &windows {
                        let len = list.len();
                        if let Ok(mut view) = list.subrange(from.min(len), to.min(len)) {
                            let _ = view.clear();
                        }
                    }
                    black_box(list)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench(c: &mut Criterion) {
    bench_filter(c);
    bench_window_clear(c);
}

criterion_group!(benches, bench);
criterion_main!(benches);
