use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::fs;
use std::rc::Rc;

use weighted_graph::config::{AlgorithmKind, SolverConfig};
use weighted_graph::graph::generators::generate_random_maze;
use weighted_graph::graph::Graph;
use weighted_graph::{maze_graph, EventRecorder, GridMaze, GridSource, Juncture, LoggingObserver};

fn load_maze(config: &SolverConfig) -> weighted_graph::Result<GridMaze<i32>> {
    match &config.maze_path {
        Some(path) => {
            info!("loading maze from {}", path.display());
            let maze: GridMaze<i32> = serde_json::from_str(&fs::read_to_string(path)?)?;
            maze.validate()?;
            Ok(maze)
        }
        None => {
            info!(
                "generating {}x{} maze with seed {}",
                config.width, config.height, config.seed
            );
            let mut rng = StdRng::seed_from_u64(config.seed);
            let openings = config.width * config.height / 10;
            Ok(generate_random_maze(
                config.width,
                config.height,
                config.max_weight,
                openings,
                &mut rng,
            ))
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = SolverConfig::from_args(env::args().skip(1))?;
    let maze = load_maze(&config)?;
    let end = config.end_for(maze.maze_width(), maze.maze_height());

    let mut graph = maze_graph(&maze)?;
    let recorder = Rc::new(EventRecorder::<Juncture, i32>::new());
    graph.add_observer(recorder.clone());
    graph.add_observer(Rc::new(LoggingObserver::new()));

    println!(
        "Maze {}x{}: {} vertices, {} edges",
        maze.maze_width(),
        maze.maze_height(),
        graph.vertex_count(),
        graph.edge_count()
    );

    match config.algorithm {
        AlgorithmKind::Bfs | AlgorithmKind::Dfs => {
            let result = if config.algorithm == AlgorithmKind::Bfs {
                graph.do_bfs(&config.start, &end)?
            } else {
                graph.do_dfs(&config.start, &end)?
            };
            println!(
                "{:?} from ({}, {}) to ({}, {}): {} vertices visited, end reached: {}",
                config.algorithm,
                config.start.x,
                config.start.y,
                end.x,
                end.y,
                result.visit_order.len(),
                result.reached_end
            );
        }
        AlgorithmKind::Dijkstra => {
            let result = graph.do_dijkstra(&config.start, &end)?;
            println!(
                "Dijkstra from ({}, {}) to ({}, {}): cost {:?}, {} steps",
                config.start.x,
                config.start.y,
                end.x,
                end.y,
                result.distance_to(&end),
                result.path.len().saturating_sub(1)
            );
        }
    }

    if config.json {
        println!("{}", serde_json::to_string_pretty(&recorder.events())?);
    }

    Ok(())
}
