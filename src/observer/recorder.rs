use serde::Serialize;
use std::cell::RefCell;

use super::GraphAlgorithmObserver;

/// One notification, as delivered to an observer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AlgorithmEvent<V, W> {
    BfsHasBegun,
    DfsHasBegun,
    Visit { vertex: V },
    SearchIsOver,
    DijkstraHasBegun,
    DijkstraVertexFinished { vertex: V, cost: W },
    DijkstraIsOver { path: Vec<V> },
}

/// Observer that keeps the full event stream of every run it sees
///
/// Useful for replaying a run in a visualization, and for tests.
#[derive(Debug)]
pub struct EventRecorder<V, W> {
    events: RefCell<Vec<AlgorithmEvent<V, W>>>,
}

impl<V: Clone, W: Copy> EventRecorder<V, W> {
    /// Creates a recorder with an empty log
    pub fn new() -> Self {
        EventRecorder {
            events: RefCell::new(Vec::new()),
        }
    }

    /// Returns a copy of the events recorded so far
    pub fn events(&self) -> Vec<AlgorithmEvent<V, W>> {
        self.events.borrow().clone()
    }

    /// Returns the vertices of every `Visit` event, in order
    pub fn visited(&self) -> Vec<V> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                AlgorithmEvent::Visit { vertex } => Some(vertex.clone()),
                _ => None,
            })
            .collect()
    }

    /// Returns `(vertex, cost)` for every finished vertex, in order
    pub fn finished(&self) -> Vec<(V, W)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                AlgorithmEvent::DijkstraVertexFinished { vertex, cost } => {
                    Some((vertex.clone(), *cost))
                }
                _ => None,
            })
            .collect()
    }

    /// Drops everything recorded so far
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn push(&self, event: AlgorithmEvent<V, W>) {
        self.events.borrow_mut().push(event);
    }
}

impl<V: Clone, W: Copy> Default for EventRecorder<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, W: Copy> GraphAlgorithmObserver<V, W> for EventRecorder<V, W> {
    fn notify_bfs_has_begun(&self) {
        self.push(AlgorithmEvent::BfsHasBegun);
    }

    fn notify_dfs_has_begun(&self) {
        self.push(AlgorithmEvent::DfsHasBegun);
    }

    fn notify_visit(&self, vertex: &V) {
        self.push(AlgorithmEvent::Visit {
            vertex: vertex.clone(),
        });
    }

    fn notify_search_is_over(&self) {
        self.push(AlgorithmEvent::SearchIsOver);
    }

    fn notify_dijkstra_has_begun(&self) {
        self.push(AlgorithmEvent::DijkstraHasBegun);
    }

    fn notify_dijkstra_vertex_finished(&self, vertex: &V, cost: W) {
        self.push(AlgorithmEvent::DijkstraVertexFinished {
            vertex: vertex.clone(),
            cost,
        });
    }

    fn notify_dijkstra_is_over(&self, path: &[V]) {
        self.push(AlgorithmEvent::DijkstraIsOver {
            path: path.to_vec(),
        });
    }
}
