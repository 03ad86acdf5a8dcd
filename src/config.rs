//! Maze configuration.
//!
//! [`MazeConfig`] gathers everything needed to build one maze instance. The
//! defaults match the layout the game ships with: a 21 x 21 grid of blocks two
//! world units wide.

/// Default number of grid rows.
pub const DEFAULT_ROWS: usize = 21;
/// Default number of grid columns.
pub const DEFAULT_COLS: usize = 21;
/// Default side length of one cell in world units.
pub const DEFAULT_CELL_SIDE: f32 = 2.0;
/// Step limit per grid cell used when no explicit limit is configured.
pub const STEP_LIMIT_PER_CELL: usize = 10;

/// Parameters for building a maze.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    /// Requested row count; even values are rounded down to odd.
    pub rows: usize,
    /// Requested column count; even values are rounded down to odd.
    pub cols: usize,
    /// Side length of one cell in world units.
    pub cell_side: f32,
    /// Seed for reproducible mazes. `None` draws fresh entropy per maze.
    pub seed: Option<u64>,
    /// Cap on wall-extension steps. `None` uses [`STEP_LIMIT_PER_CELL`] per cell.
    pub step_limit: Option<usize>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cell_side: DEFAULT_CELL_SIDE,
            seed: None,
            step_limit: None,
        }
    }
}

impl MazeConfig {
    /// Creates a configuration with the given dimensions and default everything else.
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Returns a copy of this configuration using `seed`.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MazeConfig::default();
        assert_eq!((config.rows, config.cols), (21, 21));
        assert_eq!(config.cell_side, 2.0);
        assert!(config.seed.is_none());
        assert!(config.step_limit.is_none());
    }

    #[test]
    fn test_builders() {
        let config = MazeConfig::with_dimensions(11, 15).seeded(7);
        assert_eq!((config.rows, config.cols), (11, 15));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.cell_side, DEFAULT_CELL_SIDE);
    }
}
