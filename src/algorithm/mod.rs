pub mod traits;
pub mod traversal;
pub mod dijkstra;

pub use traits::{SearchAlgorithm, ShortestPathResult, TraversalResult};

use std::fmt::Debug;
use std::hash::Hash;
use num_traits::PrimInt;

use crate::graph::Graph;
use crate::{describe, Error, Result};

/// Fails with `UnknownVertex` unless both endpoints of a run are in the graph
pub(crate) fn require_endpoints<V, W, G>(graph: &G, start: &V, end: &V) -> Result<()>
where
    V: Clone + Eq + Hash + Debug,
    W: PrimInt + Debug,
    G: Graph<V, W>,
{
    for vertex in [start, end] {
        if !graph.contains_vertex(vertex) {
            return Err(Error::UnknownVertex(describe(vertex)));
        }
    }
    Ok(())
}
