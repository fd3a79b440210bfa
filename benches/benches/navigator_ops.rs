// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use outline_filter::FilterQuery;
use outline_nav::{Tracker, recompute};
use outline_tree::{FlatTree, RawNode, TopicKind, Uid};

use std::collections::BTreeSet;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

/// A balanced tree: `depth` levels of `branching` children each.
fn gen_tree(depth: usize, branching: usize) -> FlatTree {
    fn level(depth: usize, branching: usize, prefix: &str) -> Vec<RawNode> {
        (0..branching)
            .map(|i| {
                let title = format!("{prefix}.{i}");
                let kind = if depth > 1 {
                    TopicKind::Class
                } else {
                    TopicKind::Method
                };
                let node = RawNode::new(&title, kind).with_path(&format!("/{title}"));
                if depth > 1 {
                    node.with_children(level(depth - 1, branching, &title))
                } else {
                    node
                }
            })
            .collect()
    }
    FlatTree::build(&level(depth, branching, "node"))
}

/// Every expandable uid of `tree`, for random toggle targets.
fn expandable(tree: &FlatTree) -> Vec<Uid> {
    tree.document_order()
        .filter(|&uid| !tree.children_of(uid).is_empty())
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &(depth, branching) in &[(3usize, 8usize), (4, 8), (5, 6)] {
        let tree = gen_tree(depth, branching);
        group.throughput(Throughput::Elements(tree.len() as u64));
        group.bench_function(format!("flatten_d{}_b{}", depth, branching), |b| {
            b.iter(|| black_box(gen_tree(depth, branching).len()))
        });
    }
    group.finish();
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");
    for &(depth, branching) in &[(4usize, 8usize), (5, 6)] {
        let tree = gen_tree(depth, branching);
        // Open every expandable node so the whole tree renders.
        let open: BTreeSet<Uid> = expandable(&tree).into_iter().collect();
        group.throughput(Throughput::Elements(tree.len() as u64));
        group.bench_function(format!("all_open_d{}_b{}", depth, branching), |b| {
            b.iter(|| black_box(recompute(&tree, &open, None).len()))
        });
        group.bench_function(format!("all_closed_d{}_b{}", depth, branching), |b| {
            let closed = BTreeSet::new();
            b.iter(|| black_box(recompute(&tree, &closed, None).len()))
        });
    }
    group.finish();
}

fn bench_toggle_patch(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle");
    let tree = gen_tree(4, 8);
    let targets = expandable(&tree);
    group.throughput(Throughput::Elements(256));
    group.bench_function("random_toggles_256", |b| {
        b.iter_batched(
            || {
                let mut tracker = Tracker::new();
                tracker.on_navigate(&tree, vec![Uid::new(0)]);
                (tracker, Rng::new(0xCAFE_F00D_DEAD_BEEF))
            },
            |(mut tracker, mut rng)| {
                for _ in 0..256 {
                    let uid = targets[rng.next_usize(targets.len())];
                    tracker.toggle(&tree, uid);
                }
                black_box(tracker.visible().len());
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("expand_all_subtree", |b| {
        b.iter_batched(
            || {
                let mut tracker = Tracker::new();
                tracker.on_navigate(&tree, vec![Uid::new(0)]);
                tracker
            },
            |mut tracker| {
                tracker.toggle_subtree(&tree, Uid::new(0));
                black_box(tracker.visible().len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let tree = gen_tree(4, 8);
    group.throughput(Throughput::Elements(tree.len() as u64));
    for text in ["node.3", "node.3.2.1", "nomatch"] {
        let query = FilterQuery::from_input(text, []);
        group.bench_function(format!("match_{}", text), |b| {
            b.iter(|| black_box(outline_filter::matches(&tree, &query).len()))
        });
    }
    group.bench_function("filter_change_recompute", |b| {
        let query = FilterQuery::from_input("node.3", []);
        b.iter_batched(
            || {
                let mut tracker = Tracker::new();
                tracker.on_navigate(&tree, vec![Uid::new(0)]);
                tracker
            },
            |mut tracker| {
                tracker.on_filter_change(&tree, &query);
                black_box(tracker.visible().len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_recompute,
    bench_toggle_patch,
    bench_filter,
);
criterion_main!(benches);
