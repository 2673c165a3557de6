//! Point lookups per index family, primary and secondary.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lookup_bench::index::{ArrayIndex, TreeIndex, TrieIndex};
use lookup_bench::{Dataset, KeyRole, PointIndex, Table, Workload};

const LOOKUPS: usize = 10_000;

fn sum_hits<I: PointIndex>(index: &I, table: &Table, targets: &[u64]) -> u64 {
    let mut sum = 0u64;
    for &target in targets {
        if let Some(row) = index.lookup(target) {
            sum = sum.wrapping_add(table[row].key(index.kind().role));
        }
    }
    sum
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    group.throughput(Throughput::Elements(LOOKUPS as u64));

    for size in [10_000usize, 100_000, 1_000_000].iter() {
        let dataset = Dataset::generate(*size, 42).unwrap();
        let table = dataset.table();
        let workload = Workload::generate(2018, LOOKUPS, *size as u64).unwrap();

        for role in KeyRole::ALL {
            let array = ArrayIndex::build(&dataset, role);
            let tree = TreeIndex::build(table, role);
            let trie = TrieIndex::build(table, role);

            group.bench_with_input(BenchmarkId::new(array.kind().to_string(), size), size, |b, _| {
                b.iter(|| black_box(sum_hits(&array, table, &workload)));
            });

            group.bench_with_input(BenchmarkId::new(tree.kind().to_string(), size), size, |b, _| {
                b.iter(|| black_box(sum_hits(&tree, table, &workload)));
            });

            group.bench_with_input(BenchmarkId::new(trie.kind().to_string(), size), size, |b, _| {
                b.iter(|| black_box(sum_hits(&trie, table, &workload)));
            });
        }
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let size = 100_000usize;
    let dataset = Dataset::generate(size, 42).unwrap();
    let table = dataset.table();
    group.throughput(Throughput::Elements(size as u64));

    for role in KeyRole::ALL {
        group.bench_function(BenchmarkId::new("B+tree", role.name()), |b| {
            b.iter(|| black_box(TreeIndex::build(table, role)));
        });
        group.bench_function(BenchmarkId::new("ART", role.name()), |b| {
            b.iter(|| black_box(TrieIndex::build(table, role)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lookup, bench_build);
criterion_main!(benches);
