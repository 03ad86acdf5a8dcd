//! Coordinate system transformations between grid spaces and world positions.
//!
//! This module provides functions to convert between maze grid coordinates and
//! world coordinates, making it clear how to map between these systems.

use crate::maze::grid::Space;
use crate::math::Vec2;

/// Converts a grid space to the world position of its block centre.
///
/// # Arguments
/// * `space` - The grid space (row, col)
/// * `maze_dimensions` - The grid dimensions (rows, cols)
/// * `cell_side` - Side length of one block in world units
///
/// # Returns
/// The floor-plane position `[x, y]`
///
/// # Coordinate System
/// - The centre space of an odd grid sits at the origin
/// - X increases to the right (growing column)
/// - Y increases upwards (shrinking row), so row 0 is the top edge
///
/// The half extents use integer division, so `cols / 2` and `rows / 2` are the
/// centre column and row.
pub fn space_to_world(space: Space, maze_dimensions: (usize, usize), cell_side: f32) -> Vec2 {
    let (rows, cols) = maze_dimensions;
    let x = (space.col as isize - (cols / 2) as isize) as f32 * cell_side;
    let y = ((rows / 2) as isize - space.row as isize) as f32 * cell_side;
    Vec2::new(x, y)
}

/// Converts a world position to the grid space whose block covers it.
///
/// # Arguments
/// * `position` - The floor-plane position
/// * `maze_dimensions` - The grid dimensions (rows, cols)
/// * `cell_side` - Side length of one block in world units
///
/// # Returns
/// The nearest space, or `None` when the position lies beyond the grid or the
/// inputs are not finite.
pub fn world_to_space(
    position: Vec2,
    maze_dimensions: (usize, usize),
    cell_side: f32,
) -> Option<Space> {
    if !(cell_side > 0.0 && position.x().is_finite() && position.y().is_finite()) {
        return None;
    }

    let (rows, cols) = maze_dimensions;
    let col = (position.x() / cell_side).round() as isize + (cols / 2) as isize;
    let row = (rows / 2) as isize - (position.y() / cell_side).round() as isize;

    if row < 0 || col < 0 || row as usize >= rows || col as usize >= cols {
        return None;
    }

    Some(Space::new(row as usize, col as usize))
}

/// World-space corners of a maze.
///
/// Each corner is the centre of the corresponding corner block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeBounds {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
    pub cell_side: f32,
}

impl MazeBounds {
    /// Computes the corner positions for a grid of `maze_dimensions`.
    pub fn new(maze_dimensions: (usize, usize), cell_side: f32) -> Self {
        let (rows, cols) = maze_dimensions;
        let last_row = rows.saturating_sub(1);
        let last_col = cols.saturating_sub(1);
        let at = |row, col| space_to_world(Space::new(row, col), maze_dimensions, cell_side);

        Self {
            top_left: at(0, 0),
            top_right: at(0, last_col),
            bottom_left: at(last_row, 0),
            bottom_right: at(last_row, last_col),
            cell_side,
        }
    }

    /// Highest world Y still inside the maze (outer edge of the top row).
    pub fn upper_edge(&self) -> f32 {
        self.top_left.y() + self.cell_side / 2.0
    }

    /// Lowest world Y still inside the maze (outer edge of the bottom row).
    pub fn lower_edge(&self) -> f32 {
        self.bottom_right.y() - self.cell_side / 2.0
    }

    /// Whether `point` has left the maze through the top or bottom edge.
    pub fn is_outside(&self, point: Vec2) -> bool {
        is_outside(point, self)
    }
}

/// Returns true once `point` is past the top or bottom edge of the maze.
///
/// Only the Y axis is tested: the openings are on the top and bottom rows, so
/// this is how agents detect that they walked out through the entrance or exit.
pub fn is_outside(point: Vec2, bounds: &MazeBounds) -> bool {
    point.y() < bounds.lower_edge() || point.y() > bounds.upper_edge()
}
