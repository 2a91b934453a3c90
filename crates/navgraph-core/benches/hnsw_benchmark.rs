//! HNSW Index Performance Benchmarks
//!
//! Run with: `cargo bench --bench hnsw_benchmark`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use navgraph_core::{CpuDistance, DistanceMetric, HnswIndex, HnswParams, SharedHnsw};

/// Generates a random-ish vector for benchmarking.
fn generate_vector(dim: usize, seed: u64) -> Vec<f32> {
    (0..dim)
        .map(|i| ((seed as f32 * 0.1 + i as f32 * 0.01).sin() + 1.0) / 2.0)
        .collect()
}

fn build_index(count: usize, dim: usize) -> HnswIndex<Vec<f32>, CpuDistance> {
    let params = HnswParams::new(count).with_ef_construction(100);
    let mut index = HnswIndex::new(params, CpuDistance::new(DistanceMetric::Cosine))
        .expect("valid params");
    for i in 0..count {
        index
            .insert(generate_vector(dim, i as u64))
            .expect("insert within capacity");
    }
    index
}

/// Benchmark HNSW index insertion performance.
fn bench_hnsw_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("hnsw_insert");
    group.sample_size(10);

    for count in [1000, 5000] {
        let dim = 128;
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(
            BenchmarkId::new("vectors", format!("{count}x{dim}d")),
            &count,
            |b, &count| {
                b.iter(|| black_box(build_index(count, dim).len()));
            },
        );
    }

    group.finish();
}

/// Benchmark HNSW index search latency.
fn bench_hnsw_search_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("hnsw_search_latency");

    let dim = 128;
    let index = build_index(10_000, dim);
    let query = generate_vector(dim, 99_999);

    for k in [10, 50, 100] {
        group.bench_with_input(BenchmarkId::new("top_k", k), &k, |b, &k| {
            b.iter(|| black_box(index.search_knn(&query, k)));
        });
    }

    for ef in [32, 128, 512] {
        group.bench_with_input(BenchmarkId::new("ef_search", ef), &ef, |b, &ef| {
            b.iter(|| black_box(index.search_knn_with_ef(&query, 10, ef)));
        });
    }

    group.finish();
}

/// Benchmark exhaustive scan as the recall baseline.
fn bench_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force");

    let dim = 128;
    let index = build_index(10_000, dim);
    let query = generate_vector(dim, 99_999);

    group.bench_function("top_10", |b| {
        b.iter(|| black_box(index.brute_force_knn(&query, 10)));
    });

    group.finish();
}

/// Benchmark search throughput through the shared wrapper.
fn bench_shared_search_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared_search_throughput");

    let dim = 128;
    let index = SharedHnsw::from_index(build_index(10_000, dim));
    let queries: Vec<Vec<f32>> = (0..100)
        .map(|i| generate_vector(dim, 100_000 + i))
        .collect();

    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("100_queries_top_10", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(index.search_knn(query, 10).ok());
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_hnsw_insert,
    bench_hnsw_search_latency,
    bench_brute_force,
    bench_shared_search_throughput
);
criterion_main!(benches);
