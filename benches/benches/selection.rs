// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_selection::Selection;

/// A selection holding every other key below `len`, so a range over `0..len`
/// overlaps it by half.
fn striped(len: u32) -> Selection<u32> {
    let mut sel = Selection::new();
    sel.replace_with_unique((0..len).step_by(2));
    sel
}

fn bench_extend_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/extend_range");

    // Shift-range over a list that is already half selected.
    for len in [128_u32, 512, 2_048, 8_192] {
        let range: Vec<u32> = (0..len).collect();
        group.throughput(Throughput::Elements(u64::from(len)));

        group.bench_with_input(BenchmarkId::new("extend_with", len), &range, |b, range| {
            b.iter_batched(
                || striped(len),
                |mut sel| {
                    sel.extend_with(range.iter().copied());
                    black_box(sel);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("extend_with_hashed", len),
            &range,
            |b, range| {
                b.iter_batched(
                    || striped(len),
                    |mut sel| {
                        sel.extend_with_hashed(range.iter().copied());
                        black_box(sel);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_select_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/select_all");

    for len in [128_u32, 512, 2_048, 8_192] {
        let keys: Vec<u32> = (0..len).collect();
        group.throughput(Throughput::Elements(u64::from(len)));

        group.bench_with_input(BenchmarkId::new("replace_with", len), &keys, |b, keys| {
            b.iter_batched(
                Selection::<u32>::new,
                |mut sel| {
                    sel.replace_with(keys.iter().copied());
                    black_box(sel);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("replace_with_unique", len),
            &keys,
            |b, keys| {
                b.iter_batched(
                    Selection::<u32>::new,
                    |mut sel| {
                        sel.replace_with_unique(keys.iter().copied());
                        black_box(sel);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_extend_range, bench_select_all);
criterion_main!(benches);
