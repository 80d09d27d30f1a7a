use indexmap::IndexMap;
use log::debug;
use num_traits::PrimInt;
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

use crate::algorithm::{
    dijkstra::Dijkstra,
    traversal::{BreadthFirstSearch, DepthFirstSearch},
    SearchAlgorithm, ShortestPathResult, TraversalResult,
};
use crate::graph::traits::{Graph, MutableGraph};
use crate::observer::{GraphAlgorithmObserver, ObserverRegistry};
use crate::{describe, Error, Result};

/// A directed graph with non-negative integer weights and registered observers
///
/// Vertices and adjacency entries are kept in insertion order, which is the
/// enumeration order every algorithm follows.
#[derive(Debug)]
pub struct WeightedGraph<V, W = i32>
where
    V: Clone + Eq + Hash + Debug,
    W: PrimInt + Debug,
{
    /// Outgoing edges for each vertex: vertex -> {target -> weight}
    adjacency: IndexMap<V, IndexMap<V, W>>,

    /// Observers notified by the algorithms run on this graph
    observers: ObserverRegistry<V, W>,
}

impl<V, W> WeightedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: PrimInt + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        WeightedGraph {
            adjacency: IndexMap::new(),
            observers: ObserverRegistry::new(),
        }
    }

    /// Creates a new empty graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        WeightedGraph {
            adjacency: IndexMap::with_capacity(vertices),
            observers: ObserverRegistry::new(),
        }
    }

    /// Registers an observer; re-adding the same observer is a no-op
    pub fn add_observer(&mut self, observer: Rc<dyn GraphAlgorithmObserver<V, W>>) {
        if !self.observers.add(observer) {
            debug!("observer already registered");
        }
    }

    /// Returns the number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Returns the observers registered on this graph
    pub fn observers(&self) -> &ObserverRegistry<V, W> {
        &self.observers
    }

    /// Performs a Breadth-First Search from `start`, stopping once `end` is dequeued
    pub fn do_bfs(&self, start: &V, end: &V) -> Result<TraversalResult<V>> {
        BreadthFirstSearch::new().search(self, &self.observers, start, end)
    }

    /// Performs a Depth-First Search from `start`, stopping once `end` is popped
    pub fn do_dfs(&self, start: &V, end: &V) -> Result<TraversalResult<V>> {
        DepthFirstSearch::new().search(self, &self.observers, start, end)
    }

    /// Runs Dijkstra's algorithm from `start` over the whole graph and
    /// reconstructs the cheapest path to `end`
    pub fn do_dijkstra(&self, start: &V, end: &V) -> Result<ShortestPathResult<V, W>> {
        Dijkstra::new().search(self, &self.observers, start, end)
    }

    fn require_vertex(&self, vertex: &V) -> Result<()> {
        if self.adjacency.contains_key(vertex) {
            Ok(())
        } else {
            Err(Error::UnknownVertex(describe(vertex)))
        }
    }
}

impl<V, W> Default for WeightedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: PrimInt + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for WeightedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: PrimInt + Debug,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().map(|(to, weight)| (to, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn get_weight(&self, from: &V, to: &V) -> Result<Option<W>> {
        self.require_vertex(from)?;
        self.require_vertex(to)?;
        Ok(self
            .adjacency
            .get(from)
            .and_then(|edges| edges.get(to))
            .copied())
    }
}

impl<V, W> MutableGraph<V, W> for WeightedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: PrimInt + Debug,
{
    fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.adjacency.contains_key(&vertex) {
            return Err(Error::DuplicateVertex(describe(&vertex)));
        }
        self.adjacency.insert(vertex, IndexMap::new());
        Ok(())
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<()> {
        let reason = if !self.adjacency.contains_key(&from) {
            Some("source vertex not in graph".to_string())
        } else if !self.adjacency.contains_key(&to) {
            Some("target vertex not in graph".to_string())
        } else if weight < W::zero() {
            Some(format!("negative weight {:?}", weight))
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(Error::InvalidEdge {
                from: describe(&from),
                to: describe(&to),
                reason,
            });
        }

        // Check above guarantees the source entry exists; replaces any previous weight
        if let Some(edges) = self.adjacency.get_mut(&from) {
            edges.insert(to, weight);
        }
        Ok(())
    }
}
