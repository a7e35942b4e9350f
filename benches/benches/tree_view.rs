// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use ui_events::keyboard::{Key, Modifiers, NamedKey};
use understory_tree_view::{TreeNode, TreeView, TreeViewConfig};

/// `groups` expanded parents of `per_group` leaves each.
fn build(groups: u32, per_group: u32) -> (Vec<TreeNode<u32>>, Vec<u32>) {
    let mut parents = Vec::new();
    let roots = (0..groups)
        .map(|g| {
            let id = g * (per_group + 1);
            parents.push(id);
            TreeNode::new(id, format!("Group {g}")).with_children(
                (1..=per_group).map(|i| TreeNode::new(id + i, format!("Item{g}_{i}"))),
            )
        })
        .collect();
    (roots, parents)
}

fn bench_collapse_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_view/toggle_expanded");
    for (groups, per_group) in [(32_u32, 32_u32), (128, 64)] {
        let (roots, parents) = build(groups, per_group);
        let config = TreeViewConfig::new().with_expanded(parents.iter().copied());
        let rows = u64::from(groups * (per_group + 1));
        group.throughput(Throughput::Elements(rows));
        group.bench_function(BenchmarkId::from_parameter(rows), |b| {
            let mut view = TreeView::new(&roots, config.clone());
            let middle = parents[parents.len() / 2];
            b.iter(|| {
                view.toggle_expanded(&middle, ());
                black_box(view.visible_rows().len());
            });
        });
    }
    group.finish();
}

fn bench_shift_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_view/shift_end");
    let end = Key::Named(NamedKey::End);
    for (groups, per_group) in [(32_u32, 32_u32), (128, 64)] {
        let (roots, parents) = build(groups, per_group);
        let config = TreeViewConfig::new()
            .multiselectable(true)
            .with_expanded(parents.iter().copied());
        let rows = u64::from(groups * (per_group + 1));
        group.throughput(Throughput::Elements(rows));
        group.bench_function(BenchmarkId::from_parameter(rows), |b| {
            b.iter_batched(
                || TreeView::new(&roots, config.clone()),
                |mut view| {
                    view.handle_key(&end, Modifiers::SHIFT, 0, ());
                    black_box(view);
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_type_ahead(c: &mut Criterion) {
    let (roots, parents) = build(128, 64);
    let config = TreeViewConfig::new().with_expanded(parents);
    let keys: Vec<Key> = "item127_6"
        .chars()
        .map(|ch| Key::Character(ch.to_string()))
        .collect();
    c.bench_function("tree_view/type_ahead_to_last_group", |b| {
        b.iter_batched(
            || TreeView::new(&roots, config.clone()),
            |mut view| {
                for (step, key) in keys.iter().enumerate() {
                    view.handle_key(key, Modifiers::empty(), step as u64, ());
                }
                black_box(view.focused_id().copied());
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_collapse_expand, bench_shift_end, bench_type_ahead);
criterion_main!(benches);
