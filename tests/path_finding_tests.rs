use std::collections::HashMap;
use std::rc::Rc;

use weighted_graph::graph::{Graph, WeightedGraph};
use weighted_graph::{maze_graph, Direction, EventRecorder, GridMaze, Juncture};

// Test helper function to create a city grid with walled-off blocks
fn create_city(width: usize, height: usize, buildings: &[(usize, usize)]) -> GridMaze<i32> {
    let mut maze = GridMaze::open(width, height, 1);
    for &(x, y) in buildings {
        for direction in Direction::ALL {
            maze.set_wall(Juncture::new(x, y), direction);
        }
    }
    maze
}

fn assert_valid_path(graph: &WeightedGraph<Juncture, i32>, path: &[Juncture], cost: i32) {
    let mut total = 0;
    for step in path.windows(2) {
        let weight = graph.get_weight(&step[0], &step[1]).unwrap();
        assert!(weight.is_some(), "Path should only use existing edges");
        total += weight.unwrap_or_default();
    }
    assert_eq!(total, cost, "Path cost should match reported distance");
}

// Test that paths can be found in a simple open grid
#[test]
fn test_path_finding_open_grid() {
    let graph = maze_graph(&GridMaze::open(10, 10, 1)).unwrap();
    let source = Juncture::new(0, 0);
    let target = Juncture::new(9, 9);

    let result = graph.do_dijkstra(&source, &target).unwrap();

    assert_eq!(result.distance_to(&target), Some(18));
    assert_eq!(result.path.len(), 19);
    assert_eq!(result.path[0], source, "Path should start at source");
    assert_eq!(result.path[result.path.len() - 1], target, "Path should end at target");
    assert_valid_path(&graph, &result.path, 18);
}

// Test path finding with a wall across most of the grid
#[test]
fn test_path_finding_with_obstacles() {
    let mut maze = GridMaze::open(10, 10, 1);
    for y in 0..8 {
        maze.set_wall(Juncture::new(4, y), Direction::Right);
    }
    let graph = maze_graph(&maze).unwrap();
    let source = Juncture::new(0, 0);
    let target = Juncture::new(9, 0);

    let result = graph.do_dijkstra(&source, &target).unwrap();

    // Down to row 8, across, and back up
    assert_eq!(result.distance_to(&target), Some(8 + 9 + 8));
    assert!(result.path.iter().any(|j| j.y >= 8), "Path should go around the wall");
    assert_valid_path(&graph, &result.path, 25);

    let bfs = graph.do_bfs(&source, &target).unwrap();
    assert!(bfs.reached_end);
}

// Test the city pathfinding scenario
#[test]
fn test_city_pathfinding() {
    let buildings = [
        (3, 3), (4, 3), (5, 3),
        (3, 4), (4, 4), (5, 4),
        (3, 5), (4, 5), (5, 5),
        (10, 10), (11, 10), (12, 10),
        (10, 11), (11, 11), (12, 11),
        (10, 12), (11, 12), (12, 12),
    ];
    let mut graph = maze_graph(&create_city(25, 18, &buildings)).unwrap();
    let recorder = Rc::new(EventRecorder::<Juncture, i32>::new());
    graph.add_observer(recorder.clone());

    let locations = HashMap::from([
        ("home", (0, 0)),
        ("work", (20, 15)),
        ("gym", (15, 8)),
        ("park", (8, 12)),
    ]);

    for (from_name, &(fx, fy)) in &locations {
        for (to_name, &(tx, ty)) in &locations {
            if from_name == to_name {
                continue;
            }
            let source = Juncture::new(fx, fy);
            let target = Juncture::new(tx, ty);

            recorder.clear();
            let result = graph.do_dijkstra(&source, &target).unwrap();

            // Buildings are sealed off, everything else is reachable
            assert_eq!(
                recorder.finished().len(),
                25 * 18 - buildings.len(),
                "Should finish every open cell from {}",
                from_name
            );

            // Manhattan distance is optimal when no building is in the way
            let cost = result.distance_to(&target).unwrap();
            assert!(cost >= (fx.abs_diff(tx) + fy.abs_diff(ty)) as i32);
            assert_valid_path(&graph, &result.path, cost);
            assert!(
                result.path.iter().all(|j| !buildings.contains(&(j.x, j.y))),
                "Path from {} to {} should avoid buildings",
                from_name,
                to_name
            );
        }
    }
}
