use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use weighted_graph::graph::generators::generate_random_maze;
use weighted_graph::graph::{Graph, WeightedGraph};
use weighted_graph::{
    maze_graph, BreadthFirstSearch, DepthFirstSearch, Dijkstra, Juncture, SearchAlgorithm,
    ShortestPathResult, TraversalResult,
};

type MazeGraph = WeightedGraph<Juncture, i32>;

// Function to benchmark an algorithm on a maze graph; `processed` counts the
// vertices the run handled
fn benchmark_algorithm<A, F>(
    algorithm: &A,
    graph: &MazeGraph,
    start: Juncture,
    end: Juncture,
    processed: F,
) -> Duration
where
    A: SearchAlgorithm<Juncture, i32, MazeGraph>,
    F: Fn(&A::Output) -> usize,
{
    println!(
        "Running {} on graph with {} vertices...",
        algorithm.name(),
        graph.vertex_count()
    );

    let timer = Instant::now();
    let outcome = algorithm.search(graph, graph.observers(), &start, &end);
    let duration = timer.elapsed();

    match outcome {
        Ok(result) => println!("  - {} vertices processed in {:?}", processed(&result), duration),
        Err(e) => println!("  - failed after {:?}: {}", duration, e),
    }

    duration
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Side lengths of the square mazes to test; Dijkstra is quadratic in the
    // vertex count so sizes stay modest
    let maze_sizes = vec![10, 30, 60, 100];

    println!("=====================================================");
    println!("Benchmark: BFS vs DFS vs Dijkstra on random mazes");
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(7);
    let mut results = Vec::new();

    for &side in &maze_sizes {
        println!("\nGenerating {}x{} maze...", side, side);
        let maze = generate_random_maze(side, side, 9, side * side / 10, &mut rng);
        let graph = maze_graph(&maze)?;
        let start = Juncture::new(0, 0);
        let end = Juncture::new(side - 1, side - 1);

        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let traversed = |r: &TraversalResult<Juncture>| r.visit_order.len();
        let finished = |r: &ShortestPathResult<Juncture, i32>| r.finish_order.len();

        let bfs_time = benchmark_algorithm(&BreadthFirstSearch::new(), &graph, start, end, traversed);
        let dfs_time = benchmark_algorithm(&DepthFirstSearch::new(), &graph, start, end, traversed);
        let dijkstra_time = benchmark_algorithm(&Dijkstra::new(), &graph, start, end, finished);

        results.push((side * side, bfs_time, dfs_time, dijkstra_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<12} | {:<14}", "Vertices", "BFS (us)", "DFS (us)", "Dijkstra (us)");
    println!("-----------------------------------------------------");

    for (vertices, bfs_time, dfs_time, dijkstra_time) in &results {
        println!(
            "{:<10} | {:<12} | {:<12} | {:<14}",
            vertices,
            bfs_time.as_micros(),
            dfs_time.as_micros(),
            dijkstra_time.as_micros()
        );
    }

    Ok(())
}
