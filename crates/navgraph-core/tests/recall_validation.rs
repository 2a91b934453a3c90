//! Recall quality validation for the HNSW index.
//!
//! Recall@k = |retrieved ∩ ground_truth| / k
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test recall_validation
//! cargo test --test recall_validation -- --nocapture  # With output
//! ```

use navgraph_core::{
    CpuDistance, DistanceMetric, EntryStrategy, HnswIndex, HnswParams, LevelScale, SharedHnsw,
};
use std::collections::HashSet;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Compute recall@k between retrieved results and ground truth.
#[allow(clippy::cast_precision_loss)]
fn compute_recall(retrieved: &[(usize, f32)], ground_truth: &[(usize, f32)], k: usize) -> f64 {
    let k = k.min(ground_truth.len());
    if k == 0 {
        return 0.0;
    }

    let retrieved_set: HashSet<_> = retrieved.iter().take(k).map(|(id, _)| *id).collect();
    let truth_set: HashSet<_> = ground_truth.iter().take(k).map(|(id, _)| *id).collect();
    retrieved_set.intersection(&truth_set).count() as f64 / k as f64
}

/// Generate synthetic vectors for testing.
#[allow(clippy::cast_precision_loss)]
fn generate_vectors(count: usize, dim: usize) -> Vec<Vec<f32>> {
    (0..count)
        .map(|i| {
            (0..dim)
                .map(|d| ((i * 31 + d * 17) % 1000) as f32 / 1000.0)
                .collect()
        })
        .collect()
}

fn mean_recall(
    index: &HnswIndex<Vec<f32>, CpuDistance>,
    queries: &[Vec<f32>],
    k: usize,
    ef: usize,
) -> f64 {
    let total: f64 = queries
        .iter()
        .map(|q| {
            let approx = index.search_knn_with_ef(q, k, ef).unwrap();
            let exact = index.brute_force_knn(q, k).unwrap();
            compute_recall(&approx, &exact, k)
        })
        .sum();
    total / queries.len() as f64
}

#[test]
fn test_recall_default_params() {
    init_tracing();

    // i * 31 mod 1000 is a bijection, so the 1000 vectors are distinct
    let vectors = generate_vectors(1000, 16);
    let params = HnswParams::new(2048).with_ef_construction(100);
    let mut index = HnswIndex::new(params, CpuDistance::new(DistanceMetric::Euclidean)).unwrap();
    for v in &vectors {
        index.insert(v.clone()).unwrap();
    }

    let queries: Vec<Vec<f32>> = (0..20).map(|i| vectors[i * 47].clone()).collect();
    let recall = mean_recall(&index, &queries, 10, 128);
    println!("recall@10 (ef=128): {recall:.3}");
    assert!(recall >= 0.8, "recall@10 = {recall}");
}

#[test]
fn test_recall_canonical_levels_closest_entry() {
    init_tracing();

    let vectors = generate_vectors(1000, 16);
    let params = HnswParams::new(2048)
        .with_m(12)
        .with_m_max(24)
        .with_level_scale(LevelScale::Canonical)
        .with_entry_strategy(EntryStrategy::Closest);
    let mut index = HnswIndex::new(params, CpuDistance::new(DistanceMetric::Euclidean)).unwrap();
    for v in &vectors {
        index.insert(v.clone()).unwrap();
    }

    let queries: Vec<Vec<f32>> = (0..20).map(|i| vectors[i * 43 + 3].clone()).collect();
    let recall = mean_recall(&index, &queries, 10, 128);
    println!("recall@10 canonical (ef=128): {recall:.3}");
    assert!(recall >= 0.8, "recall@10 = {recall}");
}

#[test]
fn test_self_query_finds_itself() {
    let vectors = generate_vectors(500, 24);
    let index = SharedHnsw::new(
        HnswParams::new(1024),
        CpuDistance::new(DistanceMetric::Cosine),
    )
    .unwrap();
    for v in &vectors {
        index.insert(v.clone()).unwrap();
    }

    let hits = (0..50)
        .filter(|&i| {
            let results = index.search_knn_with_ef(&vectors[i * 10], 1, 64).unwrap();
            results[0].1 < 1e-4
        })
        .count();
    assert!(hits >= 45, "only {hits}/50 self queries hit distance ~0");
}
