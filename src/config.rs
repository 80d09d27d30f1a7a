use std::path::PathBuf;
use std::str::FromStr;

use crate::graph::maze::Juncture;
use crate::{Error, Result};

/// Which algorithm the solver runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Bfs,
    Dfs,
    Dijkstra,
}

impl FromStr for AlgorithmKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(AlgorithmKind::Bfs),
            "dfs" => Ok(AlgorithmKind::Dfs),
            "dijkstra" => Ok(AlgorithmKind::Dijkstra),
            other => Err(Error::Config(format!("unknown algorithm '{}'", other))),
        }
    }
}

/// Configuration for the maze solver
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// JSON maze to load; a random maze is generated when absent
    pub maze_path: Option<PathBuf>,
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub max_weight: i32,
    pub algorithm: AlgorithmKind,
    pub start: Juncture,
    /// Defaults to the lower right corner of the maze
    pub end: Option<Juncture>,
    /// Print the recorded event stream as JSON
    pub json: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            maze_path: None,
            width: 10,
            height: 10,
            seed: 42,
            max_weight: 9,
            algorithm: AlgorithmKind::Dijkstra,
            start: Juncture::new(0, 0),
            end: None,
            json: false,
        }
    }
}

impl SolverConfig {
    /// Parses command line arguments (without the program name)
    ///
    /// `[--maze FILE] [--size WxH] [--seed N] [--max-weight N]
    /// [--algorithm bfs|dfs|dijkstra] [--start X,Y] [--end X,Y] [--json]`
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = SolverConfig::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            if flag == "--json" {
                config.json = true;
                continue;
            }

            let value = args
                .next()
                .ok_or_else(|| Error::Config(format!("missing value for {}", flag)))?;
            match flag.as_str() {
                "--maze" => config.maze_path = Some(PathBuf::from(value)),
                "--size" => {
                    let (w, h) = parse_pair(&value, 'x')?;
                    config.width = w;
                    config.height = h;
                }
                "--seed" => config.seed = parse_number(&value)?,
                "--max-weight" => config.max_weight = parse_number(&value)?,
                "--algorithm" => config.algorithm = value.parse()?,
                "--start" => {
                    let (x, y) = parse_pair(&value, ',')?;
                    config.start = Juncture::new(x, y);
                }
                "--end" => {
                    let (x, y) = parse_pair(&value, ',')?;
                    config.end = Some(Juncture::new(x, y));
                }
                other => return Err(Error::Config(format!("unknown argument '{}'", other))),
            }
        }

        if config.max_weight < 1 {
            return Err(Error::Config("max weight must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// The end juncture for a maze of the given size
    pub fn end_for(&self, width: usize, height: usize) -> Juncture {
        self.end.unwrap_or_else(|| {
            Juncture::new(width.saturating_sub(1), height.saturating_sub(1))
        })
    }
}

fn parse_number<T: FromStr>(value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("invalid number '{}'", value)))
}

fn parse_pair(value: &str, separator: char) -> Result<(usize, usize)> {
    let (a, b) = value
        .split_once(separator)
        .ok_or_else(|| Error::Config(format!("expected A{}B, got '{}'", separator, value)))?;
    Ok((parse_number(a)?, parse_number(b)?))
}
