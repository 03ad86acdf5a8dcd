//! Special positions and direction utilities.
//!
//! This module provides functions to find and work with special positions
//! in the maze, such as corners, agent spawn points, and cardinal directions.

use crate::maze::grid::Space;

/// Enum representing cardinal directions in the maze
///
/// North points toward row 0, which is also +Y in world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// North direction (0°)
    North,
    /// East direction (90°)
    East,
    /// South direction (180°)
    South,
    /// West direction (270°)
    West,
}

impl Direction {
    /// All four directions, clockwise from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Grid offset `(row, col)` of one step in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// The direction a quarter turn counter-clockwise.
    pub fn left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    /// The direction a quarter turn clockwise.
    pub fn right(self) -> Self {
        self.left().opposite()
    }
}

impl Space {
    /// The space `distance` steps away in `direction`, or `None` if that
    /// would go below row or column 0.
    pub fn offset(self, direction: Direction, distance: usize) -> Option<Space> {
        let (d_row, d_col) = direction.delta();
        let row = self.row.checked_add_signed(d_row * distance as isize)?;
        let col = self.col.checked_add_signed(d_col * distance as isize)?;
        Some(Space::new(row, col))
    }
}

/// Gets the space adjacent to the given space in the specified direction.
///
/// # Arguments
/// * `space` - The current space
/// * `direction` - The direction to move
/// * `maze_dimensions` - The dimensions of the grid (rows, cols)
///
/// # Returns
/// Option containing the adjacent space, or None if it would be outside the grid
pub fn get_adjacent_space(
    space: Space,
    direction: Direction,
    maze_dimensions: (usize, usize),
) -> Option<Space> {
    let (rows, cols) = maze_dimensions;
    space
        .offset(direction, 1)
        .filter(|next| next.row < rows && next.col < cols)
}

/// Converts a yaw angle (in degrees) to a cardinal direction.
///
/// # Arguments
/// * `yaw` - The yaw angle in degrees, clockwise from north
///
/// # Returns
/// The closest cardinal direction
pub fn yaw_to_direction(yaw: f32) -> Direction {
    // Normalize angle to 0-360
    let normalized_yaw = yaw.rem_euclid(360.0);
    let quadrant = ((normalized_yaw + 45.0) / 90.0) as usize % 4;
    Direction::ALL[quadrant]
}

/// Translates a direction into a yaw angle.
///
/// # Arguments
/// * `direction` - The cardinal direction
///
/// # Returns
/// The corresponding yaw angle in degrees
pub fn direction_to_yaw(direction: Direction) -> f32 {
    match direction {
        Direction::North => 0.0,
        Direction::East => 90.0,
        Direction::South => 180.0,
        Direction::West => 270.0,
    }
}

/// Gets the relative direction from one space to another.
///
/// # Arguments
/// * `from` - The starting space
/// * `to` - The destination space
///
/// # Returns
/// The cardinal direction from the starting space to the destination, or
/// `None` when the spaces are the same or exactly diagonal
pub fn get_direction_between_spaces(from: Space, to: Space) -> Option<Direction> {
    let row_diff = to.row as isize - from.row as isize;
    let col_diff = to.col as isize - from.col as isize;

    // Determine primary direction based on which difference is larger
    if row_diff.abs() > col_diff.abs() {
        if row_diff < 0 {
            Some(Direction::North)
        } else {
            Some(Direction::South)
        }
    } else if col_diff.abs() > row_diff.abs() {
        if col_diff > 0 {
            Some(Direction::East)
        } else {
            Some(Direction::West)
        }
    } else {
        None
    }
}

/// The four corners of the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// The corner block itself (always a wall in a generated maze).
    pub fn space(self, maze_dimensions: (usize, usize)) -> Space {
        let (rows, cols) = maze_dimensions;
        match self {
            Corner::TopLeft => Space::new(0, 0),
            Corner::TopRight => Space::new(0, cols - 1),
            Corner::BottomLeft => Space::new(rows - 1, 0),
            Corner::BottomRight => Space::new(rows - 1, cols - 1),
        }
    }

    /// Where an agent starting from this corner is placed.
    ///
    /// The right-hand top and left-hand bottom corners start one block inward
    /// on the diagonal. The other two start in the openings on the top and
    /// bottom rows, which are the exit and the entrance.
    pub fn spawn_space(self, maze_dimensions: (usize, usize)) -> Space {
        let (rows, cols) = maze_dimensions;
        match self {
            Corner::TopRight => Space::new(1, cols - 2),
            Corner::BottomLeft => Space::new(rows - 2, 1),
            Corner::TopLeft => Space::new(0, 1),
            Corner::BottomRight => Space::new(rows - 1, cols - 2),
        }
    }

    /// Initial heading for an agent spawned here: into the maze.
    pub fn spawn_heading(self) -> Direction {
        match self {
            Corner::TopLeft | Corner::TopRight => Direction::South,
            Corner::BottomLeft | Corner::BottomRight => Direction::North,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns() {
        for direction in Direction::ALL {
            assert_eq!(direction.left().right(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(direction.left().left(), direction.opposite());
        }
        assert_eq!(Direction::North.right(), Direction::East);
    }

    #[test]
    fn test_offset() {
        let space = Space::new(2, 3);
        assert_eq!(space.offset(Direction::North, 2), Some(Space::new(0, 3)));
        assert_eq!(space.offset(Direction::West, 3), Some(Space::new(2, 0)));
        assert_eq!(space.offset(Direction::West, 4), None);
        assert_eq!(space.offset(Direction::South, 1), Some(Space::new(3, 3)));
    }

    #[test]
    fn test_adjacent_space() {
        let dims = (5, 5);
        assert_eq!(get_adjacent_space(Space::new(0, 0), Direction::North, dims), None);
        assert_eq!(get_adjacent_space(Space::new(4, 4), Direction::East, dims), None);
        assert_eq!(
            get_adjacent_space(Space::new(4, 4), Direction::North, dims),
            Some(Space::new(3, 4))
        );
    }

    #[test]
    fn test_yaw_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(yaw_to_direction(direction_to_yaw(direction)), direction);
        }
        assert_eq!(yaw_to_direction(-80.0), Direction::West);
        assert_eq!(yaw_to_direction(400.0), Direction::North);
        assert_eq!(yaw_to_direction(136.0), Direction::South);
    }

    #[test]
    fn test_direction_between_spaces() {
        let from = Space::new(5, 5);
        assert_eq!(get_direction_between_spaces(from, Space::new(1, 6)), Some(Direction::North));
        assert_eq!(get_direction_between_spaces(from, Space::new(5, 9)), Some(Direction::East));
        assert_eq!(get_direction_between_spaces(from, Space::new(7, 7)), None);
    }

    #[test]
    fn test_corners() {
        let dims = (9, 11);
        assert_eq!(Corner::TopRight.space(dims), Space::new(0, 10));
        assert_eq!(Corner::BottomLeft.space(dims), Space::new(8, 0));
        assert_eq!(Corner::TopRight.spawn_space(dims), Space::new(1, 9));
        assert_eq!(Corner::BottomLeft.spawn_space(dims), Space::new(7, 1));
        assert_eq!(Corner::BottomRight.spawn_space(dims), Space::new(8, 9));
        assert_eq!(Corner::TopRight.spawn_heading(), Direction::South);
        assert_eq!(Corner::BottomLeft.spawn_heading(), Direction::North);
    }
}
