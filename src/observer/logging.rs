use log::{debug, info};
use std::fmt::Debug;

use super::GraphAlgorithmObserver;

/// Observer that forwards every notification to the `log` facade
///
/// Run boundaries are logged at `info`, per-vertex steps at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl LoggingObserver {
    pub fn new() -> Self {
        LoggingObserver
    }
}

impl<V: Debug, W: Debug> GraphAlgorithmObserver<V, W> for LoggingObserver {
    fn notify_bfs_has_begun(&self) {
        info!("BFS has begun");
    }

    fn notify_dfs_has_begun(&self) {
        info!("DFS has begun");
    }

    fn notify_visit(&self, vertex: &V) {
        debug!("visit {:?}", vertex);
    }

    fn notify_search_is_over(&self) {
        info!("search is over");
    }

    fn notify_dijkstra_has_begun(&self) {
        info!("Dijkstra has begun");
    }

    fn notify_dijkstra_vertex_finished(&self, vertex: &V, cost: W) {
        debug!("finished {:?} at cost {:?}", vertex, cost);
    }

    fn notify_dijkstra_is_over(&self, path: &[V]) {
        info!("Dijkstra is over, path of {} vertices: {:?}", path.len(), path);
    }
}
