// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_outline::{ExpansionSet, Outline, TreeNode, VisibleRows};

/// A complete tree with `fanout` children per parent, `depth` levels deep.
fn build_tree(fanout: u32, depth: u32) -> Vec<TreeNode<u32>> {
    fn level(next_id: &mut u32, fanout: u32, depth: u32) -> Vec<TreeNode<u32>> {
        (0..fanout)
            .map(|i| {
                let id = *next_id;
                *next_id += 1;
                let node = TreeNode::new(id, format!("Node {i} at {depth}"));
                if depth > 1 {
                    node.with_children(level(next_id, fanout, depth - 1))
                } else {
                    node
                }
            })
            .collect()
    }
    let mut next_id = 0;
    level(&mut next_id, fanout, depth)
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline/flatten");
    for (fanout, depth) in [(8_u32, 3_u32), (10, 4), (6, 6)] {
        let roots = build_tree(fanout, depth);
        let outline = Outline::new(&roots);
        group.throughput(Throughput::Elements(outline.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(outline.len()),
            &roots,
            |b, roots| b.iter(|| black_box(Outline::new(black_box(roots)))),
        );
    }
    group.finish();
}

fn bench_visible_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline/visible_rows");
    for (fanout, depth) in [(10_u32, 4_u32), (6, 6)] {
        let outline = Outline::new(&build_tree(fanout, depth));
        group.throughput(Throughput::Elements(outline.len() as u64));

        // Every parent open: the whole arena is visible.
        let all: ExpansionSet<u32> = outline
            .nodes()
            .iter()
            .filter(|n| n.has_children)
            .map(|n| n.id)
            .collect();
        // Every other parent open: large hidden runs to skip.
        let half: ExpansionSet<u32> = outline
            .nodes()
            .iter()
            .filter(|n| n.has_children && n.id % 2 == 0)
            .map(|n| n.id)
            .collect();

        for (name, expanded) in [("all_expanded", &all), ("half_expanded", &half)] {
            group.bench_with_input(
                BenchmarkId::new(name, outline.len()),
                expanded,
                |b, expanded| {
                    let mut rows = VisibleRows::new();
                    b.iter(|| {
                        rows.recompute(&outline, expanded);
                        black_box(rows.len());
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_flatten, bench_visible_rows);
criterion_main!(benches);
