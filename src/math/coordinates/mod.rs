//! Coordinate system transformations for the maze.
//!
//! This module provides utilities to convert between the coordinate systems used by the maze:
//! - Grid Coordinates: Used for maze generation (row/column spaces)
//! - World Coordinates: the floor plane where blocks, the walker and aircraft live (x, y)
//!
//! It centralizes all coordinate transformations and provides utilities for finding
//! special cells like the corners and agent spawn points.

mod positions;
mod transformations;

pub use positions::*;
pub use transformations::*;
