//! # FAT Chain Storage Benchmarks
//!
//! | Group | Measures |
//! |-------|----------|
//! | split | ChainCodec chunking of content into 20-char payloads |
//! | create | split + tail-first chain write + record write |
//! | open | record load + chain traversal |
//! | modify | old chain delete + new chain write + record rewrite |
//! | create_file_backend | create on the snapshot-file backend (one full rewrite per block) |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fat_storage::test_utils::test_service;
use fat_storage::{split, BackendKind, DynFileStorageService, FileStorageApi, StorageConfig};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::time::Duration;
use tempfile::TempDir;

const SIZES: [usize; 4] = [20, 200, 2_000, 20_000];

fn random_content(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    for size in SIZES {
        let content = random_content(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| black_box(split(content)))
        });
    }

    group.finish();
}

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");
    group.measurement_time(Duration::from_secs(5));

    for size in SIZES {
        let content = random_content(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            let (mut engine, _) = test_service(0);
            let mut n = 0u64;
            b.iter(|| {
                n += 1;
                black_box(engine.create(&format!("f{}", n), content).ok())
            })
        });
    }

    group.finish();
}

fn bench_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("open");

    for size in SIZES {
        let (mut engine, _) = test_service(0);
        if engine.create("target", &random_content(size)).is_err() {
            continue;
        }
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| black_box(engine.open("target").ok()))
        });
    }

    group.finish();
}

fn bench_modify(c: &mut Criterion) {
    let mut group = c.benchmark_group("modify");
    group.measurement_time(Duration::from_secs(5));

    for size in SIZES {
        let (mut engine, _) = test_service(0);
        let first = random_content(size);
        let second = random_content(size);
        if engine.create("target", &first).is_err() {
            continue;
        }
        let mut flip = false;
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                flip = !flip;
                let content = if flip { &second } else { &first };
                black_box(engine.modify("target", content).ok())
            })
        });
    }

    group.finish();
}

fn bench_create_file_backend(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_file_backend");
    group.sample_size(10);

    for size in [20, 200, 2_000] {
        let Ok(dir) = TempDir::new() else {
            continue;
        };
        let config = StorageConfig::new()
            .with_backend(BackendKind::File)
            .with_data_dir(dir.path());
        let Ok(mut engine) = DynFileStorageService::from_config(&config) else {
            continue;
        };
        let content = random_content(size);
        let mut n = 0u64;

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                n += 1;
                black_box(engine.create(&format!("f{}", n), &content).ok())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_split,
    bench_create,
    bench_open,
    bench_modify,
    bench_create_file_backend
);
criterion_main!(benches);
