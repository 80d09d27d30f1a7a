pub mod frontier;

pub use frontier::{FifoFrontier, Frontier, LifoFrontier};
