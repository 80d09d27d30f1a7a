use std::fmt;
use std::rc::Rc;

use super::GraphAlgorithmObserver;

/// The set of observers registered against one graph
///
/// Membership is by pointer identity of the shared handle. Notifications are
/// delivered in registration order, exactly once per registered observer.
pub struct ObserverRegistry<V, W> {
    observers: Vec<Rc<dyn GraphAlgorithmObserver<V, W>>>,
}

impl<V, W> ObserverRegistry<V, W> {
    /// Creates an empty registry
    pub fn new() -> Self {
        ObserverRegistry {
            observers: Vec::new(),
        }
    }

    /// Registers an observer. Returns false if it was already registered.
    pub fn add(&mut self, observer: Rc<dyn GraphAlgorithmObserver<V, W>>) -> bool {
        if self.observers.iter().any(|o| Rc::ptr_eq(o, &observer)) {
            return false;
        }
        self.observers.push(observer);
        true
    }

    /// Returns the number of registered observers
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns true if no observer is registered
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Delivers one event to every registered observer
    pub fn notify<F>(&self, mut event: F)
    where
        F: FnMut(&dyn GraphAlgorithmObserver<V, W>),
    {
        for observer in &self.observers {
            event(observer.as_ref());
        }
    }
}

impl<V, W> Default for ObserverRegistry<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> fmt::Debug for ObserverRegistry<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}
