use rand::rngs::StdRng;
use rand::SeedableRng;

use weighted_graph::graph::generators::{generate_open_grid, generate_random_maze};
use weighted_graph::graph::Graph;
use weighted_graph::{maze_graph, Direction, Error, GridMaze, GridSource, Juncture};

fn j(x: usize, y: usize) -> Juncture {
    Juncture::new(x, y)
}

#[test]
fn test_open_two_by_two_grid() {
    let maze = generate_open_grid(2, 2, 1);
    let graph = maze_graph(&maze).unwrap();

    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 8);

    let adjacent = [
        (j(0, 0), j(1, 0)),
        (j(0, 0), j(0, 1)),
        (j(1, 0), j(1, 1)),
        (j(0, 1), j(1, 1)),
    ];
    for (a, b) in adjacent {
        assert_eq!(graph.get_weight(&a, &b).unwrap(), Some(1));
        assert_eq!(graph.get_weight(&b, &a).unwrap(), Some(1));
    }
    assert_eq!(graph.get_weight(&j(0, 0), &j(1, 1)).unwrap(), None);
}

#[test]
fn test_vertices_added_column_major() {
    let graph = maze_graph(&generate_open_grid(2, 2, 1)).unwrap();

    let order: Vec<Juncture> = graph.vertices().copied().collect();
    assert_eq!(order, vec![j(0, 0), j(0, 1), j(1, 0), j(1, 1)]);
}

#[test]
fn test_walls_block_both_directions() {
    let mut maze = GridMaze::open(2, 1, 1);
    maze.set_wall(j(0, 0), Direction::Right);

    assert!(maze.is_wall(j(1, 0), Direction::Left));
    let graph = maze_graph(&maze).unwrap();
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 0);

    maze.remove_wall(j(1, 0), Direction::Left);
    assert_eq!(maze_graph(&maze).unwrap().edge_count(), 2);
}

#[test]
fn test_directional_weights() {
    let mut maze = GridMaze::open(1, 2, 1);
    maze.set_weight(j(0, 0), Direction::Below, 5);
    maze.set_weight(j(0, 1), Direction::Above, 2);

    let graph = maze_graph(&maze).unwrap();

    assert_eq!(graph.get_weight(&j(0, 0), &j(0, 1)).unwrap(), Some(5));
    assert_eq!(graph.get_weight(&j(0, 1), &j(0, 0)).unwrap(), Some(2));
}

// A grid source reporting a one-sided wall
struct OneWayCorridor;

impl GridSource<i32> for OneWayCorridor {
    fn maze_width(&self) -> usize {
        3
    }

    fn maze_height(&self) -> usize {
        1
    }

    fn is_wall(&self, _at: Juncture, direction: Direction) -> bool {
        direction != Direction::Right
    }

    fn weight(&self, at: Juncture, _direction: Direction) -> i32 {
        at.x as i32 + 1
    }
}

#[test]
fn test_one_sided_walls_give_directed_edges() {
    let graph = maze_graph(&OneWayCorridor).unwrap();

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.get_weight(&j(0, 0), &j(1, 0)).unwrap(), Some(1));
    assert_eq!(graph.get_weight(&j(1, 0), &j(2, 0)).unwrap(), Some(2));
    assert_eq!(graph.get_weight(&j(1, 0), &j(0, 0)).unwrap(), None);

    let result = graph.do_bfs(&j(2, 0), &j(0, 0)).unwrap();
    assert!(!result.reached_end);
}

#[test]
fn test_negative_maze_weight_rejected() {
    let mut maze = GridMaze::open(2, 1, 1);
    maze.set_weight(j(0, 0), Direction::Right, -3);

    assert!(matches!(maze.validate(), Err(Error::Config(_))));
    assert!(matches!(maze_graph(&maze), Err(Error::InvalidEdge { .. })));
}

#[test]
fn test_maze_from_json() {
    let json = r#"{
        "width": 2,
        "height": 1,
        "walls": [[true, true, true, false], [true, true, false, true]],
        "weights": [[1, 1, 1, 4], [1, 1, 6, 1]]
    }"#;
    let maze: GridMaze<i32> = serde_json::from_str(json).unwrap();
    maze.validate().unwrap();

    let graph = maze_graph(&maze).unwrap();
    assert_eq!(graph.get_weight(&j(0, 0), &j(1, 0)).unwrap(), Some(4));
    assert_eq!(graph.get_weight(&j(1, 0), &j(0, 0)).unwrap(), Some(6));
}

#[test]
fn test_maze_with_missing_cells_rejected() {
    let json = r#"{"width": 2, "height": 2, "walls": [], "weights": []}"#;
    let maze: GridMaze<i32> = serde_json::from_str(json).unwrap();

    assert!(matches!(maze.validate(), Err(Error::Config(_))));
}

#[test]
fn test_juncture_steps_stay_inside_grid() {
    assert_eq!(j(0, 0).step(Direction::Above, 3, 3), None);
    assert_eq!(j(0, 0).step(Direction::Left, 3, 3), None);
    assert_eq!(j(2, 2).step(Direction::Right, 3, 3), None);
    assert_eq!(j(2, 2).step(Direction::Below, 3, 3), None);
    assert_eq!(j(1, 1).step(Direction::Above, 3, 3), Some(j(1, 0)));
    assert_eq!(j(1, 1).step(Direction::Right, 3, 3), Some(j(2, 1)));
}

#[test]
fn test_random_maze_is_fully_connected() {
    let mut rng = StdRng::seed_from_u64(5);
    let maze = generate_random_maze(12, 8, 9, 0, &mut rng);
    let graph = maze_graph(&maze).unwrap();

    // A perfect maze is a spanning tree: two directed edges per passage
    assert_eq!(graph.edge_count(), 2 * (12 * 8 - 1));

    let start = j(0, 0);
    let end = j(11, 7);
    assert!(graph.do_bfs(&start, &end).unwrap().reached_end);

    let result = graph.do_dijkstra(&start, &end).unwrap();
    assert_eq!(result.finish_order.len(), 12 * 8);
}
