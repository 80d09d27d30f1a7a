use indexmap::IndexMap;
use log::warn;
use num_traits::PrimInt;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::Graph;
use crate::observer::ObserverRegistry;
use crate::Result;

/// Outcome of a Breadth- or Depth-First Search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalResult<V> {
    /// Vertices in the order they were visited, each at most once
    pub visit_order: Vec<V>,

    /// True if the end vertex was reached and the search-over signal emitted
    pub reached_end: bool,
}

/// Result of a Dijkstra run
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResult<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: PrimInt + Debug,
{
    /// Source vertex
    pub start: V,

    /// Final distance of every finished vertex
    pub distances: IndexMap<V, W>,

    /// Predecessor of every vertex on its shortest path; the start and
    /// unreached vertices have no entry
    pub predecessors: IndexMap<V, V>,

    /// Vertices in the order they joined the finished set
    pub finish_order: Vec<V>,

    /// Cheapest path from start to the requested end, both inclusive
    pub path: Vec<V>,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: PrimInt + Debug,
{
    /// Final distance from start to `target`, if it was reached
    pub fn distance_to(&self, target: &V) -> Option<W> {
        self.distances.get(target).copied()
    }

    /// Walks predecessors back from `target` and returns the path start..=target
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.distances.contains_key(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;

        // Build path in reverse order
        while let Some(pred) = self.predecessors.get(current) {
            // A chain longer than the finished set can only be a cycle
            if path.len() > self.distances.len() {
                warn!("cycle detected in predecessor chain at {:?}", current);
                return None;
            }
            path.push(pred.clone());
            current = pred;
        }

        if *current != self.start {
            return None;
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for the algorithms a graph can run with observers attached
pub trait SearchAlgorithm<V, W, G>
where
    V: Clone + Eq + Hash + Debug,
    W: PrimInt + Debug,
    G: Graph<V, W>,
{
    /// What a completed run hands back to the caller
    type Output;

    /// Runs the algorithm from `start` towards `end`, notifying `observers`
    fn search(
        &self,
        graph: &G,
        observers: &ObserverRegistry<V, W>,
        start: &V,
        end: &V,
    ) -> Result<Self::Output>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
