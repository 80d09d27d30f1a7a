use std::fmt::Debug;
use std::hash::Hash;
use num_traits::PrimInt;

use crate::Result;

/// Trait representing a weighted directed graph over caller-supplied vertices
pub trait Graph<V, W>: Debug
where
    V: Clone + Eq + Hash + Debug,
    W: PrimInt + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all vertices, in enumeration order
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex
    ///
    /// An absent vertex has no outgoing edges.
    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn contains_vertex(&self, vertex: &V) -> bool;

    /// Gets the weight of the edge `from -> to`
    ///
    /// Fails with `UnknownVertex` if either endpoint is absent. A missing edge
    /// between two present vertices is `Ok(None)`.
    fn get_weight(&self, from: &V, to: &V) -> Result<Option<W>>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: PrimInt + Debug,
{
    /// Adds a vertex with an empty adjacency set
    fn add_vertex(&mut self, vertex: V) -> Result<()>;

    /// Adds or replaces the directed edge `from -> to`
    fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<()>;
}
