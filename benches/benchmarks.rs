//! Performance benchmarks for vwalk

use std::ffi::OsString;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vwalk::test_utils::TestTree;
use vwalk::walk::{FileWalker, WalkerConfig, version_cmp};

/// Build a tree with `dirs` subdirectories of `files` small files each.
fn build_tree(dirs: usize, files: usize) -> TestTree {
    let tree = TestTree::new();
    for d in 0..dirs {
        for f in 0..files {
            tree.add_file(&format!("dir{}/file{}.txt", d, f), "x");
        }
    }
    tree
}

fn bench_walk(c: &mut Criterion) {
    let tree = build_tree(20, 50);

    c.bench_function("walk_recursive_1000_files", |b| {
        b.iter(|| {
            let config = WalkerConfig {
                recursive: true,
                ..Default::default()
            };
            let walker = FileWalker::open(tree.path(), config).expect("open walker");
            black_box(walker.count())
        })
    });

    c.bench_function("walk_non_recursive", |b| {
        b.iter(|| {
            let walker =
                FileWalker::open(tree.path(), WalkerConfig::default()).expect("open walker");
            black_box(walker.count())
        })
    });
}

fn bench_version_sort(c: &mut Criterion) {
    let names: Vec<OsString> = (0..1000)
        .map(|i| OsString::from(format!("img{}.png", (i * 7919) % 1000)))
        .collect();

    c.bench_function("version_sort_1000_names", |b| {
        b.iter(|| {
            let mut names = names.clone();
            names.sort_by(|a, b| version_cmp(a, b));
            black_box(names)
        })
    });
}

criterion_group!(benches, bench_walk, bench_version_sort);
criterion_main!(benches);
