//! Graph generators for MST property-based tests.
//!
//! Every fixture is produced from a seeded `SmallRng`, so a failing proptest
//! case can be replayed from its `(distribution, seed)` pair alone. Edges are
//! emitted in input order and deliberately include both endpoint
//! orientations, which exercises canonicalisation in `Graph::from_edges`.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, WeightDistribution};

const MIN_VERTICES: usize = 8;
const MAX_VERTICES: usize = 64;
/// Dense graphs stay smaller to bound the quadratic pair walk.
const DENSE_MAX_VERTICES: usize = 32;

/// Generates MST fixtures across every [`WeightDistribution`].
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for an explicitly chosen distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let (vertex_count, edges) = match distribution {
        WeightDistribution::Unique => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let p = rng.gen_range(0.2..=0.6);
            (vertex_count, random_pairs(rng, 0, vertex_count, p, continuous_weight))
        }
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
            let p = rng.gen_range(0.7..=0.95);
            (vertex_count, random_pairs(rng, 0, vertex_count, p, continuous_weight))
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
    };

    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

fn continuous_weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.1..100.0)
}

/// Walks every pair in `offset..offset + size` and keeps each with
/// probability `p`. Guarantees at least one edge when `size >= 2`.
fn random_pairs(
    rng: &mut SmallRng,
    offset: usize,
    size: usize,
    p: f64,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> Vec<(usize, usize, f64)> {
    let mut edges = Vec::new();
    for i in offset..offset + size {
        for j in (i + 1)..offset + size {
            if rng.gen_bool(p) {
                let w = weight(rng);
                edges.push(oriented(rng, i, j, w));
            }
        }
    }
    if edges.is_empty() && size >= 2 {
        let w = weight(rng);
        edges.push((offset, offset + 1, w));
    }
    edges
}

/// Large groups of edges share one of at most three small integer weights.
fn generate_identical_weights(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, f64)>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let pool: Vec<f64> = (0..rng.gen_range(1..=3))
        .map(|_| f64::from(rng.gen_range(1_u8..=10)))
        .collect();
    let p = rng.gen_range(0.3..=0.7);
    let edges = random_pairs(rng, 0, vertex_count, p, |r| pool[r.gen_range(0..pool.len())]);
    (vertex_count, edges)
}

/// Random spanning path plus roughly `n/2..n` extra edges, which may repeat
/// existing pairs.
fn generate_sparse(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, f64)>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }

    let mut edges: Vec<_> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], continuous_weight(rng)))
        .collect();

    for _ in 0..rng.gen_range(vertex_count / 2..=vertex_count) {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        if left != right {
            edges.push((left, right, continuous_weight(rng)));
        }
    }
    (vertex_count, edges)
}

/// Two to five blocks of 3 to 12 vertices with no edges between blocks.
fn generate_disconnected(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, f64)>) {
    let mut vertex_count = 0;
    let mut edges = Vec::new();
    for _ in 0..rng.gen_range(2..=5) {
        let size = rng.gen_range(3..=12);
        let p = rng.gen_range(0.3..=0.8);
        edges.extend(random_pairs(rng, vertex_count, size, p, continuous_weight));
        vertex_count += size;
    }
    (vertex_count, edges)
}

fn oriented(rng: &mut SmallRng, i: usize, j: usize, weight: f64) -> (usize, usize, f64) {
    if rng.gen_bool(0.5) { (i, j, weight) } else { (j, i, weight) }
}
