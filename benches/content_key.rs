//! Benchmarks for content key construction.

use blobkey::ContentKey;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Cursor;

fn bench_from_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("content_key");

    for size in [64, 256, 1024, 4096, 16384, 65536].iter() {
        let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("from_bytes", size), &data, |b, data| {
            b.iter(|| ContentKey::from_bytes(black_box(data)))
        });
    }

    group.finish();
}

fn bench_from_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_reader");

    for size in [1024, 16384, 65536].iter() {
        let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("from_reader", size), &data, |b, data| {
            b.iter(|| ContentKey::from_reader(Cursor::new(black_box(data))).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_from_bytes, bench_from_reader);
criterion_main!(benches);
