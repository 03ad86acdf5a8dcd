//! Maze Land - perfect maze generation for 3D maze scenes
//!
//! This crate builds the grid a maze level is made of: an odd-sized field of
//! wall and aisle cells with exactly one path between any two aisles, an
//! entrance on the bottom edge and an exit on the top edge. It also maps grid
//! cells to world positions so a scene builder can place one block per wall
//! cell, and answers the local questions agents ask while walking the maze.
//!
//! # Architecture
//! - `maze/`: the wall-extending generator, the grid and its topology queries
//! - `math/`: 2D vectors, grid/world coordinate transforms and directions
//! - `benchmarks/`: timers and generation counters for performance analysis
//! - `config` and `error`: [`MazeConfig`] and [`MazeError`]
//!
//! # Example
//! ```rust
//! use maze_land::{MazeConfig, generate_maze};
//!
//! let grid = generate_maze(&MazeConfig::with_dimensions(21, 21).seeded(7)).unwrap();
//! assert!(grid.is_perfect());
//! println!("{grid}");
//! ```

#![warn(missing_docs)]

pub mod benchmarks;
pub mod config;
pub mod error;
pub mod math;
pub mod maze;

pub use config::MazeConfig;
pub use error::{MazeError, MazeResult};
pub use math::Vec2;
pub use maze::{CellState, GenerationStats, Grid, MazeGenerator, Space, generate_maze};
