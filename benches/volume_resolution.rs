//! Benchmark for declaration parsing and volume name resolution
//!
//! Nodes declare at most a few dozen disks; both paths should stay well
//! under a millisecond at that scale.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use storage_volume_resolver::{ConfigParser, NameResolver};

fn declaration(disks: usize) -> String {
    (0..disks)
        .map(|i| format!("/home/disk{}/doris.SSD,medium:ssd,capacity:{}", i, 100 + i))
        .collect::<Vec<_>>()
        .join(";")
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("config_parser");

    for disks in [1usize, 16, 64] {
        let raw = declaration(disks);
        group.throughput(Throughput::Elements(disks as u64));
        group.bench_function(format!("parse_{}_disks", disks), |b| {
            b.iter(|| ConfigParser::parse(black_box(&raw)).unwrap());
        });
    }

    group.finish();
}

fn bench_resolve_shared_leaf(c: &mut Criterion) {
    let mut group = c.benchmark_group("name_resolver");

    // Every path shares the leaf, forcing disambiguation on each one
    let paths: Vec<String> = (0..64)
        .map(|i| format!("/mnt/rack{}/disk{}/doris", i % 4, i))
        .collect();
    group.throughput(Throughput::Elements(paths.len() as u64));

    group.bench_function("resolve_64_shared_leaf", |b| {
        b.iter(|| NameResolver::resolve(black_box(&paths)));
    });

    group.finish();
}

fn bench_resolve_distinct(c: &mut Criterion) {
    let mut group = c.benchmark_group("name_resolver");

    let paths: Vec<String> = (0..64).map(|i| format!("/data/volume{}", i)).collect();
    group.throughput(Throughput::Elements(paths.len() as u64));

    group.bench_function("resolve_64_distinct", |b| {
        b.iter(|| NameResolver::resolve(black_box(&paths)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_resolve_shared_leaf,
    bench_resolve_distinct,
);
criterion_main!(benches);
