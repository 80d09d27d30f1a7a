//! Conversion of a rectangular maze into a [`WeightedGraph`] of junctures.

use log::debug;
use num_traits::PrimInt;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::graph::{Graph, MutableGraph, WeightedGraph};
use crate::{Error, Result};

/// A cell of the maze, `(0, 0)` being the upper left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Juncture {
    pub x: usize,
    pub y: usize,
}

impl Juncture {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The adjacent juncture in `direction`, if it lies inside a `width` x `height` grid
    pub fn step(self, direction: Direction, width: usize, height: usize) -> Option<Self> {
        let (x, y) = match direction {
            Direction::Above => (Some(self.x), self.y.checked_sub(1)),
            Direction::Below => (Some(self.x), self.y.checked_add(1)),
            Direction::Left => (self.x.checked_sub(1), Some(self.y)),
            Direction::Right => (self.x.checked_add(1), Some(self.y)),
        };
        match (x, y) {
            (Some(x), Some(y)) if x < width && y < height => Some(Self::new(x, y)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Above,
    Below,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Above,
        Direction::Below,
        Direction::Right,
        Direction::Left,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Above => Direction::Below,
            Direction::Below => Direction::Above,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    fn index(self) -> usize {
        match self {
            Direction::Above => 0,
            Direction::Below => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Read access to a rectangular maze
pub trait GridSource<W> {
    fn maze_width(&self) -> usize;

    fn maze_height(&self) -> usize;

    /// True if a wall blocks movement from `at` towards `direction`
    fn is_wall(&self, at: Juncture, direction: Direction) -> bool;

    /// Non-negative cost of moving from `at` towards `direction`
    fn weight(&self, at: Juncture, direction: Direction) -> W;
}

/// In-memory maze: per-cell walls and weights for the four directions
///
/// Indexed row-major; the direction slot order is above, below, left, right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMaze<W> {
    width: usize,
    height: usize,
    walls: Vec<[bool; 4]>,
    weights: Vec<[W; 4]>,
}

impl<W: PrimInt + Debug> GridMaze<W> {
    /// A maze without internal walls where every move costs `weight`
    pub fn open(width: usize, height: usize, weight: W) -> Self {
        GridMaze {
            width,
            height,
            walls: vec![[false; 4]; width * height],
            weights: vec![[weight; 4]; width * height],
        }
    }

    /// Checks the deserialized dimensions against the cell tables
    pub fn validate(&self) -> Result<()> {
        let cells = self.width * self.height;
        if self.walls.len() != cells || self.weights.len() != cells {
            return Err(Error::Config(format!(
                "maze of {}x{} needs {} cells, found {} walls and {} weights",
                self.width,
                self.height,
                cells,
                self.walls.len(),
                self.weights.len()
            )));
        }
        if let Some(w) = self.weights.iter().flatten().find(|w| **w < W::zero()) {
            return Err(Error::Config(format!("negative maze weight {:?}", w)));
        }
        Ok(())
    }

    /// A maze where every juncture is boxed in by walls
    pub fn walled(width: usize, height: usize, weight: W) -> Self {
        GridMaze {
            walls: vec![[true; 4]; width * height],
            ..Self::open(width, height, weight)
        }
    }

    /// Places a wall between `at` and its neighbour in `direction`, on both sides
    pub fn set_wall(&mut self, at: Juncture, direction: Direction) {
        if let Some(cell) = self.cell(at) {
            self.walls[cell][direction.index()] = true;
        }
        if let Some(other) = at.step(direction, self.width, self.height) {
            if let Some(cell) = self.cell(other) {
                self.walls[cell][direction.opposite().index()] = true;
            }
        }
    }

    /// Opens the passage between `at` and its neighbour in `direction`, on both sides
    pub fn remove_wall(&mut self, at: Juncture, direction: Direction) {
        if let Some(cell) = self.cell(at) {
            self.walls[cell][direction.index()] = false;
        }
        if let Some(other) = at.step(direction, self.width, self.height) {
            if let Some(cell) = self.cell(other) {
                self.walls[cell][direction.opposite().index()] = false;
            }
        }
    }

    /// Sets the cost of moving from `at` towards `direction`
    pub fn set_weight(&mut self, at: Juncture, direction: Direction, weight: W) {
        if let Some(cell) = self.cell(at) {
            self.weights[cell][direction.index()] = weight;
        }
    }

    fn cell(&self, at: Juncture) -> Option<usize> {
        (at.x < self.width && at.y < self.height).then(|| at.y * self.width + at.x)
    }
}

impl<W: PrimInt + Debug> GridSource<W> for GridMaze<W> {
    fn maze_width(&self) -> usize {
        self.width
    }

    fn maze_height(&self) -> usize {
        self.height
    }

    fn is_wall(&self, at: Juncture, direction: Direction) -> bool {
        // Outside the grid everything is wall
        self.cell(at)
            .map_or(true, |cell| self.walls[cell][direction.index()])
    }

    fn weight(&self, at: Juncture, direction: Direction) -> W {
        self.cell(at)
            .map_or(W::zero(), |cell| self.weights[cell][direction.index()])
    }
}

/// Builds the graph of a maze
///
/// Every juncture becomes a vertex. For each juncture and each direction with
/// no wall and an existing neighbour, a directed edge carrying the maze's
/// weight for that move is added.
pub fn maze_graph<W, M>(maze: &M) -> Result<WeightedGraph<Juncture, W>>
where
    W: PrimInt + Debug,
    M: GridSource<W> + ?Sized,
{
    let (width, height) = (maze.maze_width(), maze.maze_height());
    let mut graph = WeightedGraph::with_capacity(width * height);

    for x in 0..width {
        for y in 0..height {
            graph.add_vertex(Juncture::new(x, y))?;
        }
    }

    for x in 0..width {
        for y in 0..height {
            let current = Juncture::new(x, y);
            for direction in Direction::ALL {
                if maze.is_wall(current, direction) {
                    continue;
                }
                if let Some(next) = current.step(direction, width, height) {
                    graph.add_edge(current, next, maze.weight(current, direction))?;
                }
            }
        }
    }

    debug!(
        "maze {}x{} -> {} vertices, {} edges",
        width,
        height,
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
