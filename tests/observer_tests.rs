use std::cell::Cell;
use std::rc::Rc;

use weighted_graph::graph::{MutableGraph, WeightedGraph};
use weighted_graph::{AlgorithmEvent, EventRecorder, GraphAlgorithmObserver, LoggingObserver};

fn line() -> WeightedGraph<&'static str, i32> {
    let mut graph = WeightedGraph::new();
    for v in ["A", "B"] {
        graph.add_vertex(v).unwrap();
    }
    graph.add_edge("A", "B", 1).unwrap();
    graph
}

// Counts visits only; relies on the default no-op hooks for everything else
#[derive(Default)]
struct VisitCounter {
    visits: Cell<usize>,
}

impl GraphAlgorithmObserver<&'static str, i32> for VisitCounter {
    fn notify_visit(&self, _vertex: &&'static str) {
        self.visits.set(self.visits.get() + 1);
    }
}

#[test]
fn test_readding_observer_is_noop() {
    let mut graph = line();
    let recorder = Rc::new(EventRecorder::<&'static str, i32>::new());
    graph.add_observer(recorder.clone());
    graph.add_observer(recorder.clone());
    assert_eq!(graph.observer_count(), 1);

    graph.do_bfs(&"A", &"B").unwrap();

    assert_eq!(
        recorder.events(),
        vec![
            AlgorithmEvent::BfsHasBegun,
            AlgorithmEvent::Visit { vertex: "A" },
            AlgorithmEvent::Visit { vertex: "B" },
            AlgorithmEvent::SearchIsOver,
        ]
    );
}

#[test]
fn test_every_observer_sees_every_event() {
    let mut graph = line();
    let first = Rc::new(EventRecorder::<&'static str, i32>::new());
    let second = Rc::new(EventRecorder::<&'static str, i32>::new());
    let counter = Rc::new(VisitCounter::default());
    graph.add_observer(first.clone());
    graph.add_observer(second.clone());
    graph.add_observer(counter.clone());
    graph.add_observer(Rc::new(LoggingObserver::new()));
    assert_eq!(graph.observer_count(), 4);

    graph.do_dfs(&"A", &"B").unwrap();

    assert_eq!(first.events(), second.events());
    assert_eq!(first.events()[0], AlgorithmEvent::DfsHasBegun);
    assert_eq!(counter.visits.get(), 2);
}

#[test]
fn test_observers_persist_across_runs() {
    let mut graph = line();
    let recorder = Rc::new(EventRecorder::<&'static str, i32>::new());
    graph.add_observer(recorder.clone());

    graph.do_bfs(&"A", &"B").unwrap();
    graph.do_dijkstra(&"A", &"B").unwrap();

    let events = recorder.events();
    assert_eq!(events.len(), 4 + 4);
    assert_eq!(events[4], AlgorithmEvent::DijkstraHasBegun);
    assert_eq!(
        events[7],
        AlgorithmEvent::DijkstraIsOver {
            path: vec!["A", "B"]
        }
    );

    recorder.clear();
    assert!(recorder.events().is_empty());
}

#[test]
fn test_events_serialize_with_tag() {
    let event: AlgorithmEvent<&str, i32> = AlgorithmEvent::DijkstraVertexFinished {
        vertex: "B",
        cost: 3,
    };
    let json = serde_json::to_value(&event).unwrap();

    assert_eq!(
        json,
        serde_json::json!({"event": "dijkstra_vertex_finished", "vertex": "B", "cost": 3})
    );
}

#[test]
fn test_registry_starts_empty() {
    let mut graph = line();
    assert!(graph.observers().is_empty());
    assert_eq!(graph.observers().len(), 0);

    graph.add_observer(Rc::new(LoggingObserver::new()));
    assert!(!graph.observers().is_empty());
    assert_eq!(graph.observers().len(), 1);
}
