pub mod logging;
pub mod recorder;
pub mod registry;

pub use logging::LoggingObserver;
pub use recorder::{AlgorithmEvent, EventRecorder};
pub use registry::ObserverRegistry;

/// Listener notified synchronously while a graph algorithm runs
///
/// Every hook has an empty default body so an observer only implements the
/// notifications it cares about. Observers must not mutate the graph or start
/// another algorithm from inside a hook.
pub trait GraphAlgorithmObserver<V, W> {
    /// Called once before a Breadth-First Search starts
    fn notify_bfs_has_begun(&self) {}

    /// Called once before a Depth-First Search starts
    fn notify_dfs_has_begun(&self) {}

    /// Called once for every distinct vertex visited by BFS or DFS
    fn notify_visit(&self, _vertex: &V) {}

    /// Called at most once per BFS/DFS, right after the end vertex is dequeued
    fn notify_search_is_over(&self) {}

    /// Called once before Dijkstra's algorithm starts
    fn notify_dijkstra_has_begun(&self) {}

    /// Called when a vertex joins the finished set, with its final cost
    fn notify_dijkstra_vertex_finished(&self, _vertex: &V, _cost: W) {}

    /// Called once after Dijkstra completes, with the path ordered start..=end
    fn notify_dijkstra_is_over(&self, _path: &[V]) {}
}
