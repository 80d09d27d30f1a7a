use log::{debug, info};
use num_traits::PrimInt;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::{require_endpoints, SearchAlgorithm, TraversalResult};
use crate::data_structures::{FifoFrontier, Frontier, LifoFrontier};
use crate::graph::Graph;
use crate::observer::ObserverRegistry;
use crate::Result;

/// Frontier-driven search shared by BFS and DFS
///
/// A vertex is visited the first time it is removed from the frontier. The
/// end check runs on every removal, whether or not it caused a visit, and
/// stops the search at once. If the frontier drains first the run ends
/// without the search-over signal.
fn traverse<V, W, G, F>(
    graph: &G,
    observers: &ObserverRegistry<V, W>,
    start: &V,
    end: &V,
) -> TraversalResult<V>
where
    V: Clone + Eq + Hash + Debug,
    W: PrimInt + Debug,
    G: Graph<V, W>,
    F: Frontier<V>,
{
    let mut visited: HashSet<V> = HashSet::new();
    let mut visit_order = Vec::new();
    let mut frontier = F::new();
    frontier.push(start.clone());

    while let Some(current) = frontier.pop() {
        if !visited.contains(&current) {
            observers.notify(|o| o.notify_visit(&current));
            visited.insert(current.clone());
            visit_order.push(current.clone());

            for (next, _) in graph.neighbors(&current) {
                if !visited.contains(next) {
                    frontier.push(next.clone());
                }
            }
        }

        if current == *end {
            observers.notify(|o| o.notify_search_is_over());
            debug!("reached {:?} after {} visits", end, visit_order.len());
            return TraversalResult {
                visit_order,
                reached_end: true,
            };
        }
    }

    info!(
        "{:?} is unreachable from {:?}, {} vertices visited",
        end,
        start,
        visit_order.len()
    );
    TraversalResult {
        visit_order,
        reached_end: false,
    }
}

/// Breadth-First Search: nearest vertices first
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirstSearch;

impl BreadthFirstSearch {
    /// Creates a new BFS instance
    pub fn new() -> Self {
        BreadthFirstSearch
    }
}

impl<V, W, G> SearchAlgorithm<V, W, G> for BreadthFirstSearch
where
    V: Clone + Eq + Hash + Debug,
    W: PrimInt + Debug,
    G: Graph<V, W>,
{
    type Output = TraversalResult<V>;

    fn search(
        &self,
        graph: &G,
        observers: &ObserverRegistry<V, W>,
        start: &V,
        end: &V,
    ) -> Result<TraversalResult<V>> {
        require_endpoints::<V, W, G>(graph, start, end)?;
        observers.notify(|o| o.notify_bfs_has_begun());
        Ok(traverse::<V, W, G, FifoFrontier<V>>(graph, observers, start, end))
    }

    fn name(&self) -> &'static str {
        "BFS"
    }
}

/// Depth-First Search: newly discovered vertices before their siblings
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirstSearch;

impl DepthFirstSearch {
    /// Creates a new DFS instance
    pub fn new() -> Self {
        DepthFirstSearch
    }
}

impl<V, W, G> SearchAlgorithm<V, W, G> for DepthFirstSearch
where
    V: Clone + Eq + Hash + Debug,
    W: PrimInt + Debug,
    G: Graph<V, W>,
{
    type Output = TraversalResult<V>;

    fn search(
        &self,
        graph: &G,
        observers: &ObserverRegistry<V, W>,
        start: &V,
        end: &V,
    ) -> Result<TraversalResult<V>> {
        require_endpoints::<V, W, G>(graph, start, end)?;
        observers.notify(|o| o.notify_dfs_has_begun());
        Ok(traverse::<V, W, G, LifoFrontier<V>>(graph, observers, start, end))
    }

    fn name(&self) -> &'static str {
        "DFS"
    }
}
