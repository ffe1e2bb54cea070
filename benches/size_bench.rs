// Size calculator benchmarks

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use eventsize::model::{Branch, EventTree, branches_size, rank_branches};

/// Tree with `top` top-level branches, each carrying a three-level chain of
/// sub-branches.
fn synthetic_tree(top: usize) -> EventTree {
    let branches = (0..top)
        .map(|i| {
            let leaf = Branch::new(format!("leaf_{i}"), 40, (i as u64 % 7) * 128);
            let inner = Branch::new(format!("inner_{i}"), 60, 0).with_children(vec![leaf]);
            Branch::new(format!("branch_{i}"), 80, (i as u64 % 13) * 1024)
                .with_children(vec![inner])
        })
        .collect();
    EventTree::new("Events", branches)
}

fn bench_branches_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("branches_size");
    for size in [100, 1_000, 10_000] {
        let tree = synthetic_tree(size);
        group.bench_with_input(BenchmarkId::new("branches", size), &tree, |b, tree| {
            b.iter(|| black_box(branches_size(black_box(&tree.branches))));
        });
    }
    group.finish();
}

fn bench_rank_branches(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_branches");
    for size in [100, 1_000, 10_000] {
        let tree = synthetic_tree(size);
        group.bench_with_input(BenchmarkId::new("branches", size), &tree, |b, tree| {
            b.iter(|| black_box(rank_branches(black_box(tree))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_branches_size, bench_rank_branches);
criterion_main!(benches);
