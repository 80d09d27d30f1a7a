//! Weighted Graph - observable BFS, DFS and Dijkstra over a generic directed graph
//!
//! This library provides a directed graph with non-negative integer edge weights
//! and three canonical algorithms on top of it: Breadth-First Search, Depth-First
//! Search and Dijkstra's single-source shortest paths.
//!
//! Every algorithm reports its progress synchronously to the observers registered
//! on the graph, which is how visualizations and instrumentation follow a run.
//! A maze adapter turns any rectangular grid source into a graph of junctures.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod observer;

pub use algorithm::{
    dijkstra::Dijkstra,
    traversal::{BreadthFirstSearch, DepthFirstSearch},
    SearchAlgorithm, ShortestPathResult, TraversalResult,
};
/// Re-export main types for convenient use
pub use graph::maze::{maze_graph, Direction, GridMaze, GridSource, Juncture};
pub use graph::weighted::WeightedGraph;
pub use observer::{AlgorithmEvent, EventRecorder, GraphAlgorithmObserver, LoggingObserver};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex already present: {0}")]
    DuplicateVertex(String),

    #[error("Invalid edge: from {from} to {to} ({reason})")]
    InvalidEdge {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Target {end} is unreachable from {start}")]
    UnreachableTarget { start: String, end: String },

    #[error("Distance from {start} to {end} exceeds the weight type's range")]
    DistanceOverflow { start: String, end: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Renders a vertex for inclusion in an error message.
pub(crate) fn describe<V: std::fmt::Debug>(vertex: &V) -> String {
    format!("{:?}", vertex)
}
