//! Immutable graph model consumed by the Borůvka engine.
//!
//! Vertices are opaque labels interned to dense `usize` ids in order of first
//! appearance. Edges are undirected and stored canonically (`source < target`)
//! together with the sequence number of their position in the input, which
//! makes the edge ordering total.

use std::{cmp::Ordering, collections::HashMap, sync::Arc};

use crate::error::GraphError;

/// A single undirected, weighted edge in canonical form (`source < target`).
///
/// Edges order by `(weight, source, target, sequence)`, comparing weights with
/// [`f64::total_cmp`]. Sequence numbers are unique within a [`Graph`], so two
/// distinct edges of the same graph never compare equal and every minimum is
/// unique. Equality follows the same order, so `0.0` and `-0.0` weights are
/// distinct.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: f64,
    sequence: u64,
}

impl Edge {
    fn canonical(left: usize, right: usize, weight: f64, sequence: u64) -> Self {
        let (source, target) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            source,
            target,
            weight,
            sequence,
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }

    /// Returns the position of the edge in the input edge set.
    #[must_use]
    #[rustfmt::skip]
    pub fn sequence(&self) -> u64 { self.sequence }

    /// Returns `true` when `vertex` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, vertex: usize) -> bool {
        self.source == vertex || self.target == vertex
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Edge {}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An undirected, edge-weighted graph with labelled vertices.
///
/// # Examples
/// ```
/// use boruvka_core::Graph;
///
/// let mut builder = Graph::builder();
/// builder.add_edge("A", "B", 1.0)?;
/// builder.add_edge("B", "C", 2.0)?;
/// let graph = builder.build();
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.vertex_id("C"), Some(2));
/// # Ok::<(), boruvka_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    labels: Vec<Arc<str>>,
    index: HashMap<Arc<str>, usize>,
    edges: Vec<Edge>,
    incidence: Vec<Vec<usize>>,
}

impl Graph {
    /// Returns a builder for labelled graphs.
    #[must_use]
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Builds a graph over vertices `0..vertex_count` from `(left, right,
    /// weight)` triples. Vertex labels are the decimal ids.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when an endpoint is out of range,
    /// [`GraphError::SelfLoop`] for loops and [`GraphError::NonFiniteWeight`]
    /// for NaN or infinite weights.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::Graph;
    ///
    /// let graph = Graph::from_edges(3, [(0, 1, 1.0), (2, 1, 4.0)])?;
    /// assert_eq!(graph.edges()[1].source(), 1);
    /// assert_eq!(graph.edges()[1].target(), 2);
    /// assert_eq!(graph.label(2), Some("2"));
    /// # Ok::<(), boruvka_core::GraphError>(())
    /// ```
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> Result<Self, GraphError> {
        let mut builder = GraphBuilder::default();
        for vertex in 0..vertex_count {
            builder.add_vertex(&vertex.to_string());
        }
        for (left, right, weight) in edges {
            for vertex in [left, right] {
                if vertex >= vertex_count {
                    return Err(GraphError::InvalidVertex {
                        vertex,
                        vertex_count,
                    });
                }
            }
            builder.push_edge(left, right, weight)?;
        }
        Ok(builder.build())
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the number of edges, duplicates included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns every edge in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the label of `vertex`, if it exists.
    #[must_use]
    pub fn label(&self, vertex: usize) -> Option<&str> {
        self.labels.get(vertex).map(AsRef::as_ref)
    }

    /// Returns the id assigned to `label`, if it exists.
    #[must_use]
    pub fn vertex_id(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Returns the edges incident to `vertex`. Unknown vertices have none.
    pub fn incident_edges(&self, vertex: usize) -> impl Iterator<Item = &Edge> + '_ {
        self.incidence
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter_map(|&index| self.edges.get(index))
    }
}

/// Incrementally assembles a labelled [`Graph`].
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    labels: Vec<Arc<str>>,
    index: HashMap<Arc<str>, usize>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Interns `label` and returns its vertex id. Repeated labels return the
    /// id assigned on first sight.
    pub fn add_vertex(&mut self, label: &str) -> usize {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.labels.len();
        let label: Arc<str> = Arc::from(label);
        self.labels.push(Arc::clone(&label));
        self.index.insert(label, id);
        id
    }

    /// Adds an undirected edge between two labelled vertices, interning the
    /// labels as needed. Parallel edges are kept.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when both labels are equal and
    /// [`GraphError::NonFiniteWeight`] when `weight` is NaN or infinite. No
    /// vertex is interned when the edge is rejected.
    pub fn add_edge(&mut self, left: &str, right: &str, weight: f64) -> Result<(), GraphError> {
        if left == right {
            return Err(GraphError::SelfLoop {
                vertex: Arc::from(left),
            });
        }
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight {
                left: Arc::from(left),
                right: Arc::from(right),
            });
        }
        let left = self.add_vertex(left);
        let right = self.add_vertex(right);
        self.push_edge(left, right, weight)
    }

    fn push_edge(&mut self, left: usize, right: usize, weight: f64) -> Result<(), GraphError> {
        if left == right {
            return Err(GraphError::SelfLoop {
                vertex: self.label_of(left),
            });
        }
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight {
                left: self.label_of(left),
                right: self.label_of(right),
            });
        }
        let sequence = self.edges.len() as u64;
        self.edges
            .push(Edge::canonical(left, right, weight, sequence));
        Ok(())
    }

    fn label_of(&self, vertex: usize) -> Arc<str> {
        self.labels
            .get(vertex)
            .map_or_else(|| Arc::from(vertex.to_string()), Arc::clone)
    }

    /// Returns the number of vertices interned so far.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the number of edges added so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Finalises the graph, building the per-vertex incidence lists.
    #[must_use]
    pub fn build(self) -> Graph {
        let mut incidence = vec![Vec::new(); self.labels.len()];
        for (index, edge) in self.edges.iter().enumerate() {
            for vertex in [edge.source, edge.target] {
                if let Some(list) = incidence.get_mut(vertex) {
                    list.push(index);
                }
            }
        }
        Graph {
            labels: self.labels,
            index: self.index,
            edges: self.edges,
            incidence,
        }
    }
}
