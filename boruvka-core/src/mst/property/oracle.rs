//! Sequential Kruskal oracle for MST property verification.
//!
//! Provides a simple, trusted, sequential implementation of Kruskal's
//! algorithm for use as a reference oracle in property tests. The sort order
//! mirrors `Edge::Ord`, so for inputs with ties the oracle selects exactly the
//! same edge set as the Borůvka driver.

use std::cmp::Ordering;

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct SequentialMstResult {
    /// Total weight of the MST/forest.
    pub total_weight: f64,
    /// Selected edges as canonical `(source, target, sequence)` triples,
    /// sorted by sequence.
    pub edges: Vec<(usize, usize, u64)>,
    /// Number of connected components after MST construction.
    pub component_count: usize,
}

impl SequentialMstResult {
    /// Number of edges in the MST/forest.
    pub(super) fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Computes a minimum spanning forest using sequential Kruskal's algorithm.
///
/// Self-loops, out-of-range endpoints and non-finite weights are skipped.
pub(super) fn sequential_kruskal(
    vertex_count: usize,
    edges: &[(usize, usize, f64)],
) -> SequentialMstResult {
    let mut canon = canonicalise_and_filter(edges, vertex_count);
    canon.sort_unstable_by(cmp_canon_edge);

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut rank: Vec<usize> = vec![0; vertex_count];
    let mut components = vertex_count;
    let mut total_weight = 0.0;
    let mut selected = Vec::new();

    for edge in &canon {
        let ra = find_root(&mut parent, edge.source);
        let rb = find_root(&mut parent, edge.target);
        if ra != rb {
            union_by_rank(&mut parent, &mut rank, ra, rb);
            total_weight += edge.weight;
            selected.push((edge.source, edge.target, edge.sequence));
            components -= 1;
        }
    }

    selected.sort_unstable_by_key(|&(_, _, sequence)| sequence);
    SequentialMstResult {
        total_weight,
        edges: selected,
        component_count: components,
    }
}

// ── Internal types ──────────────────────────────────────────────────────

/// Canonicalised edge for oracle processing, mirroring `Edge` fields.
struct CanonEdge {
    source: usize,
    target: usize,
    weight: f64,
    sequence: u64,
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Returns `true` when an edge should be excluded from MST consideration.
fn is_invalid_edge(source: usize, target: usize, vertex_count: usize, weight: f64) -> bool {
    let is_self_loop = source == target;
    let is_out_of_bounds = source >= vertex_count || target >= vertex_count;
    let is_non_finite = !weight.is_finite();
    is_self_loop || is_out_of_bounds || is_non_finite
}

/// Canonicalises edges to `(min, max)`, numbering them by input position
/// before filtering so sequences line up with `Graph::from_edges`.
fn canonicalise_and_filter(edges: &[(usize, usize, f64)], vertex_count: usize) -> Vec<CanonEdge> {
    edges
        .iter()
        .zip(0_u64..)
        .filter_map(|(&(s, t, weight), sequence)| {
            if is_invalid_edge(s, t, vertex_count, weight) {
                return None;
            }
            let (lo, hi) = if s <= t { (s, t) } else { (t, s) };
            Some(CanonEdge {
                source: lo,
                target: hi,
                weight,
                sequence,
            })
        })
        .collect()
}

/// Sort comparator matching `Edge::Ord` exactly.
fn cmp_canon_edge(a: &CanonEdge, b: &CanonEdge) -> Ordering {
    a.weight
        .total_cmp(&b.weight)
        .then_with(|| a.source.cmp(&b.source))
        .then_with(|| a.target.cmp(&b.target))
        .then_with(|| a.sequence.cmp(&b.sequence))
}

/// Selects the root and child for a union operation.
///
/// Prefers the vertex with the higher rank; when ranks are equal, the
/// smaller index becomes root.
fn choose_root(rank: &[usize], a: usize, b: usize) -> (usize, usize) {
    match rank[a].cmp(&rank[b]) {
        Ordering::Greater => (a, b),
        Ordering::Less => (b, a),
        Ordering::Equal if a <= b => (a, b),
        Ordering::Equal => (b, a),
    }
}

/// Union by rank, breaking ties by smaller index.
fn union_by_rank(parent: &mut [usize], rank: &mut [usize], a: usize, b: usize) {
    let (root, child) = choose_root(rank, a, b);
    parent[child] = root;
    if rank[root] == rank[child] {
        rank[root] += 1;
    }
}
