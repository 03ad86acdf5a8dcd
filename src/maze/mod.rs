//! Maze generation and topology module.
//!
//! This module provides the wall-extending maze generator, the grid it
//! produces, and the queries agents and scene builders run against it.
//!
//! - [`generator`]: [`MazeGenerator`] and [`GenerationStats`]
//! - [`grid`]: [`Grid`], [`Space`] and [`CellState`], plus text rendering and parsing
//! - [`topology`]: open directions, dead ends and connectivity checks on a [`Grid`]

pub mod generator;
pub mod grid;
pub mod topology;


pub use generator::{GenerationStats, MazeGenerator};
pub use grid::{CellState, Grid, Space};

use crate::config::MazeConfig;
use crate::error::MazeResult;

/// Builds a maze from `config` in one call.
///
/// # Errors
/// Propagates dimension and stall errors from [`MazeGenerator`].
pub fn generate_maze(config: &MazeConfig) -> MazeResult<Grid> {
    MazeGenerator::from_config(config)?.generate()
}
