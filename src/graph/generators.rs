use rand::prelude::*;
use std::collections::HashSet;

use crate::graph::maze::{Direction, GridMaze, Juncture};
use crate::graph::{MutableGraph, WeightedGraph};
use crate::Result;

/// Generates an open `width` x `height` maze where every move costs `weight`
pub fn generate_open_grid(width: usize, height: usize, weight: i32) -> GridMaze<i32> {
    GridMaze::open(width, height, weight)
}

/// Generates a perfect maze (exactly one route between any two junctures)
/// by carving passages with a randomized depth-first walk, then knocks out
/// `extra_openings` further walls to create loops.
///
/// Every move is given a random weight in `1..=max_weight`.
pub fn generate_random_maze<R: Rng>(
    width: usize,
    height: usize,
    max_weight: i32,
    extra_openings: usize,
    rng: &mut R,
) -> GridMaze<i32> {
    let mut maze = GridMaze::walled(width, height, 1);
    if width == 0 || height == 0 {
        return maze;
    }

    // Carve a spanning tree
    let mut visited = HashSet::new();
    let mut stack = vec![Juncture::new(0, 0)];
    visited.insert(Juncture::new(0, 0));

    while let Some(&current) = stack.last() {
        let unvisited: Vec<(Juncture, Direction)> = Direction::ALL
            .into_iter()
            .filter_map(|d| current.step(d, width, height).map(|n| (n, d)))
            .filter(|(n, _)| !visited.contains(n))
            .collect();

        match unvisited.choose(rng) {
            Some(&(next, direction)) => {
                maze.remove_wall(current, direction);
                visited.insert(next);
                stack.push(next);
            }
            None => {
                stack.pop();
            }
        }
    }

    // Open a few extra passages so more than one route exists
    for _ in 0..extra_openings {
        let at = Juncture::new(rng.gen_range(0..width), rng.gen_range(0..height));
        if let Some(&direction) = Direction::ALL.choose(rng) {
            if at.step(direction, width, height).is_some() {
                maze.remove_wall(at, direction);
            }
        }
    }

    for x in 0..width {
        for y in 0..height {
            for direction in Direction::ALL {
                let weight = rng.gen_range(1..=max_weight.max(1));
                maze.set_weight(Juncture::new(x, y), direction, weight);
            }
        }
    }

    maze
}

/// Generates a random directed graph over vertices `0..n` with roughly
/// `edge_factor * n` edges weighted in `0..=max_weight`
pub fn generate_random_graph<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: i32,
    rng: &mut R,
) -> Result<WeightedGraph<usize, i32>> {
    let mut graph = WeightedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v)?;
    }
    if n == 0 {
        return Ok(graph);
    }

    // Approximately edge_factor * n edges
    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            graph.add_edge(u, v, rng.gen_range(0..=max_weight.max(0)))?;
        }
    }

    Ok(graph)
}
