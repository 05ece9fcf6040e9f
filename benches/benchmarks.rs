//! Performance benchmarks for arbor

use std::path::Path;

use arbor::test_utils::TestDir;
use arbor::{OutputConfig, OutputFormat, Tree, TreeWalker, WalkerConfig, render};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

/// `width` directories per level, `depth` levels deep, `width` files in each.
fn create_test_tree(width: usize, depth: usize) -> TestDir {
    fn fill(dir: &TestDir, prefix: &str, width: usize, depth: usize) {
        for f in 0..width {
            dir.add_file(&format!("{}/file_{}.txt", prefix, f), "x");
        }
        if depth == 0 {
            return;
        }
        for d in 0..width {
            fill(dir, &format!("{}/dir_{}", prefix, d), width, depth - 1);
        }
    }

    let dir = TestDir::new();
    fill(&dir, "root", width, depth);
    dir
}

fn walk(root: &Path) -> Tree {
    TreeWalker::new(WalkerConfig::default()).walk(root).unwrap()
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    let small = create_test_tree(4, 2);
    let small_root = small.path().join("root");
    group.bench_function("small_tree", |b| b.iter(|| walk(black_box(&small_root))));

    let large = create_test_tree(6, 3);
    let large_root = large.path().join("root");
    group.bench_function("large_tree", |b| b.iter(|| walk(black_box(&large_root))));

    let sorted_walker = TreeWalker::new(WalkerConfig {
        sort_by_mtime: true,
        ..Default::default()
    });
    group.bench_function("large_tree_sorted", |b| {
        b.iter(|| sorted_walker.walk(black_box(&large_root)).unwrap())
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let dir = create_test_tree(6, 3);
    let tree = walk(&dir.path().join("root"));

    let mut group = c.benchmark_group("render");

    for (name, format) in [
        ("ascii", OutputFormat::Ascii),
        ("json", OutputFormat::Json),
        ("xml", OutputFormat::Xml),
    ] {
        let config = OutputConfig {
            format,
            show_permissions: true,
            ..Default::default()
        };
        group.bench_function(name, |b| {
            b.iter(|| render(black_box(&tree), black_box(&config)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_walk, bench_render);
criterion_main!(benches);
