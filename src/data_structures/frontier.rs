use std::collections::VecDeque;
use std::fmt::Debug;

/// Container of discovered-but-not-yet-processed vertices
///
/// The removal discipline is what distinguishes one traversal from another.
pub trait Frontier<V>: Debug {
    /// Creates an empty frontier
    fn new() -> Self
    where
        Self: Sized;

    /// Adds a vertex to the frontier
    fn push(&mut self, vertex: V);

    /// Removes the next vertex to process
    fn pop(&mut self) -> Option<V>;
}

/// First-in first-out frontier, used by Breadth-First Search
#[derive(Debug)]
pub struct FifoFrontier<V> {
    queue: VecDeque<V>,
}

impl<V: Debug> Frontier<V> for FifoFrontier<V> {
    fn new() -> Self {
        FifoFrontier {
            queue: VecDeque::new(),
        }
    }

    fn push(&mut self, vertex: V) {
        self.queue.push_back(vertex);
    }

    fn pop(&mut self) -> Option<V> {
        self.queue.pop_front()
    }
}

/// Last-in first-out frontier, used by Depth-First Search
#[derive(Debug)]
pub struct LifoFrontier<V> {
    stack: Vec<V>,
}

impl<V: Debug> Frontier<V> for LifoFrontier<V> {
    fn new() -> Self {
        LifoFrontier { stack: Vec::new() }
    }

    fn push(&mut self, vertex: V) {
        self.stack.push(vertex);
    }

    fn pop(&mut self) -> Option<V> {
        self.stack.pop()
    }
}
