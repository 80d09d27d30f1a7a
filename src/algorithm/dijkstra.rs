use indexmap::IndexMap;
use log::{debug, info, warn};
use num_traits::PrimInt;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::{require_endpoints, SearchAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::observer::ObserverRegistry;
use crate::{describe, Error, Result};

/// Classic Dijkstra's algorithm with a linear selection scan
///
/// Runs until every vertex reachable from the start is finished, regardless of
/// where the requested end vertex is. Selection is O(V) per step. Distances
/// must fit in `W`; a sum past `W::max_value()` is reported, never wrapped.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

/// Working state of one run, discarded when the run returns
struct DijkstraState<V, W> {
    /// Tentative distance of every vertex, in graph enumeration order;
    /// `None` stands for infinity
    tentative: IndexMap<V, Option<W>>,
    predecessors: IndexMap<V, V>,
    finished: HashSet<V>,
    finish_order: Vec<V>,
    /// Vertices offered a distance that does not fit in `W`
    overflowed: HashSet<V>,
}

impl<V, W> DijkstraState<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: PrimInt + Debug,
{
    fn new<'a>(vertices: impl Iterator<Item = &'a V>, start: &V) -> Self
    where
        V: 'a,
    {
        let tentative = vertices
            .map(|v| {
                let distance = (v == start).then(W::zero);
                (v.clone(), distance)
            })
            .collect::<IndexMap<_, _>>();
        DijkstraState {
            predecessors: IndexMap::with_capacity(tentative.len()),
            finished: HashSet::with_capacity(tentative.len()),
            finish_order: Vec::with_capacity(tentative.len()),
            overflowed: HashSet::new(),
            tentative,
        }
    }

    /// Picks the unfinished vertex with the strictly smallest known distance;
    /// ties go to the first one in enumeration order
    fn select(&self) -> Option<(V, W)> {
        let mut best: Option<(&V, W)> = None;
        for (vertex, distance) in &self.tentative {
            let Some(distance) = *distance else {
                continue;
            };
            if self.finished.contains(vertex) {
                continue;
            }
            if best.map_or(true, |(_, least)| distance < least) {
                best = Some((vertex, distance));
            }
        }
        best.map(|(v, d)| (v.clone(), d))
    }

    fn finish(&mut self, vertex: &V) {
        self.finished.insert(vertex.clone());
        self.finish_order.push(vertex.clone());
    }

    fn relax(&mut self, from: &V, from_distance: W, to: &V, weight: W) {
        if self.finished.contains(to) {
            return;
        }
        let Some(candidate) = from_distance.checked_add(&weight) else {
            self.overflowed.insert(to.clone());
            return;
        };
        if let Some(current) = self.tentative.get_mut(to) {
            if current.map_or(true, |d| candidate < d) {
                *current = Some(candidate);
                self.predecessors.insert(to.clone(), from.clone());
            }
        }
    }

    /// True if `target` can be reached from a vertex whose distance overflowed.
    /// Every unfinished vertex reachable from the start is, so this tells an
    /// unrepresentable distance apart from a disconnected target.
    fn overflow_reaches<G>(&self, graph: &G, target: &V) -> bool
    where
        G: Graph<V, W>,
    {
        let mut seen: HashSet<&V> = self.overflowed.iter().collect();
        let mut stack: Vec<&V> = self.overflowed.iter().collect();
        while let Some(current) = stack.pop() {
            if current == target {
                return true;
            }
            for (next, _) in graph.neighbors(current) {
                if !self.finished.contains(next) && seen.insert(next) {
                    stack.push(next);
                }
            }
        }
        false
    }

    fn into_result(self, start: &V) -> ShortestPathResult<V, W> {
        let distances = self
            .finish_order
            .iter()
            .filter_map(|v| {
                self.tentative
                    .get(v)
                    .copied()
                    .flatten()
                    .map(|d| (v.clone(), d))
            })
            .collect();
        ShortestPathResult {
            start: start.clone(),
            distances,
            predecessors: self.predecessors,
            finish_order: self.finish_order,
            path: Vec::new(),
        }
    }
}

impl<V, W, G> SearchAlgorithm<V, W, G> for Dijkstra
where
    V: Clone + Eq + Hash + Debug,
    W: PrimInt + Debug,
    G: Graph<V, W>,
{
    type Output = ShortestPathResult<V, W>;

    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn search(
        &self,
        graph: &G,
        observers: &ObserverRegistry<V, W>,
        start: &V,
        end: &V,
    ) -> Result<ShortestPathResult<V, W>> {
        require_endpoints::<V, W, G>(graph, start, end)?;

        let n = graph.vertex_count();
        let mut state = DijkstraState::<V, W>::new(graph.vertices(), start);
        observers.notify(|o| o.notify_dijkstra_has_begun());

        // Main Dijkstra loop
        while state.finished.len() < n {
            let Some((current, distance)) = state.select() else {
                warn!(
                    "{} of {} vertices are unreachable from {:?}",
                    n - state.finished.len(),
                    n,
                    start
                );
                break;
            };

            state.finish(&current);
            observers.notify(|o| o.notify_dijkstra_vertex_finished(&current, distance));
            debug!("finished {:?} at {:?}", current, distance);

            for (next, weight) in graph.neighbors(&current) {
                state.relax(&current, distance, next, weight);
            }
        }

        if !state.finished.contains(end) {
            if state.overflow_reaches(graph, end) {
                return Err(Error::DistanceOverflow {
                    start: describe(start),
                    end: describe(end),
                });
            }
            return Err(Error::UnreachableTarget {
                start: describe(start),
                end: describe(end),
            });
        }

        let mut result = state.into_result(start);
        result.path = result.path_to(end).ok_or_else(|| Error::UnreachableTarget {
            start: describe(start),
            end: describe(end),
        })?;

        info!(
            "shortest path {:?} -> {:?}: cost {:?} over {} vertices",
            start,
            end,
            result.distance_to(end),
            result.path.len()
        );
        observers.notify(|o| o.notify_dijkstra_is_over(&result.path));
        Ok(result)
    }
}
