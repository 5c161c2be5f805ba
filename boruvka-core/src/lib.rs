//! Borůvka core library.
//!
//! Computes minimum spanning trees (or forests, for disconnected input) with
//! Borůvka's algorithm. The per-round cheapest outgoing edge search can run
//! sequentially or split across a worker pool; both paths return the same
//! edges because edges are totally ordered by `(weight, source, target,
//! sequence)`.

mod boruvka;
mod builder;
mod error;
mod graph;
mod mst;
#[cfg(test)]
mod test_utils;

pub use crate::{
    boruvka::{Boruvka, compute_mst},
    builder::BoruvkaBuilder,
    error::{GraphError, GraphErrorCode, MstError, MstErrorCode, Result},
    graph::{Edge, Graph, GraphBuilder},
    mst::{
        BoruvkaRun, ComponentForest, ComponentId, DriverState, MinimumSpanningForest,
        SearchStrategy, cheapest_outgoing_edge, cheapest_outgoing_edge_concurrent,
    },
};
