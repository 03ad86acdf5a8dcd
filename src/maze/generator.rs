//! Maze generation using the wall-extending algorithm.
//!
//! This module builds a perfect maze (connected, no loops) on an odd-sized
//! grid. Walls grow from randomly ordered points on the even/even lattice: a
//! candidate run wanders two cells at a time until it touches an existing
//! wall, at which point the whole run becomes wall. A run that boxes itself in
//! is thrown away and restarted from its origin.
//!
//! # Examples
//!
//! ```rust
//! use maze_land::maze::generator::MazeGenerator;
//!
//! // Create a 21x21 maze generator with a fixed seed
//! let generator = MazeGenerator::new(21, 21, Some(42)).unwrap();
//!
//! // Generation runs to completion in one call
//! let grid = generator.generate().unwrap();
//! assert!(grid.is_perfect());
//! ```
use log::{debug, trace, warn};
use rand::prelude::*;
use rand::rngs::StdRng;

use super::grid::{CellState, Grid, Space};
use crate::config::{MazeConfig, STEP_LIMIT_PER_CELL};
use crate::error::{MazeError, MazeResult};
use crate::math::coordinates::Direction;

/// Counters collected while generating one maze.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    /// Number of lattice points wall extension was considered from.
    pub start_points: usize,
    /// Runs committed to wall.
    pub extensions: usize,
    /// Cursor advances plus reverts.
    pub steps: usize,
    /// Runs thrown away because they boxed themselves in.
    pub reverts: usize,
}

/// Maze generator using the wall-extending algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGenerator {
    rows: usize,
    cols: usize,
    seed: Option<u64>,
    step_limit: usize,
}

/// Rounds an even dimension down to odd and rejects anything below 3.
fn normalize_dimension(axis: &'static str, requested: usize) -> MazeResult<usize> {
    let normalized = if requested % 2 == 0 {
        requested.saturating_sub(1)
    } else {
        requested
    };

    if normalized < 3 {
        return Err(MazeError::InvalidDimension {
            axis,
            requested,
            normalized,
        });
    }
    Ok(normalized)
}

impl MazeGenerator {
    /// Creates a new maze generator with the given dimensions
    ///
    /// Even dimensions are decremented to the next odd value. With a seed,
    /// every call to [`generate`](Self::generate) returns the same grid.
    ///
    /// # Errors
    /// [`MazeError::InvalidDimension`] if either dimension is below 3 once
    /// made odd, [`MazeError::GridTooLarge`] if the cell count or the default
    /// step limit overflows `usize`.
    pub fn new(rows: usize, cols: usize, seed: Option<u64>) -> MazeResult<Self> {
        let rows = normalize_dimension("rows", rows)?;
        let cols = normalize_dimension("cols", cols)?;
        let step_limit = rows
            .checked_mul(cols)
            .and_then(|cells| cells.checked_mul(STEP_LIMIT_PER_CELL))
            .ok_or(MazeError::GridTooLarge { rows, cols })?;

        Ok(Self {
            rows,
            cols,
            seed,
            step_limit,
        })
    }

    /// Creates a generator from a [`MazeConfig`].
    pub fn from_config(config: &MazeConfig) -> MazeResult<Self> {
        let generator = Self::new(config.rows, config.cols, config.seed)?;
        Ok(match config.step_limit {
            Some(limit) => generator.with_step_limit(limit),
            None => generator,
        })
    }

    /// Replaces the wall-extension step limit.
    pub fn with_step_limit(mut self, step_limit: usize) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Normalized `(rows, cols)` of the grids this generator produces.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Seed every generation restarts from, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Maximum wall-extension steps before generation reports a stall.
    pub fn step_limit(&self) -> usize {
        self.step_limit
    }

    /// Generates a maze.
    ///
    /// # Errors
    /// [`MazeError::GenerationStalled`] if wall extension exceeds the step limit.
    pub fn generate(&self) -> MazeResult<Grid> {
        self.generate_with_stats().map(|(grid, _)| grid)
    }

    /// Generates a maze and reports how much work it took.
    pub fn generate_with_stats(&self) -> MazeResult<(Grid, GenerationStats)> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.build(&mut rng)
    }

    /// Generates a maze drawing randomness from `rng` instead of the seed.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> MazeResult<Grid> {
        self.build(rng).map(|(grid, _)| grid)
    }

    /// Interior points with both coordinates even, in row-major order.
    fn start_points(&self) -> Vec<Space> {
        (1..self.rows - 1)
            .filter(|row| row % 2 == 0)
            .flat_map(|row| {
                (1..self.cols - 1)
                    .filter(|col| col % 2 == 0)
                    .map(move |col| Space::new(row, col))
            })
            .collect()
    }

    fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> MazeResult<(Grid, GenerationStats)> {
        let mut grid = Grid::bordered(self.rows, self.cols);
        let mut stats = GenerationStats::default();

        let mut starts = self.start_points();
        starts.shuffle(rng);
        stats.start_points = starts.len();

        for start in starts {
            if !grid.is_wall(start) {
                self.extend_wall(&mut grid, start, rng, &mut stats)?;
            }
        }

        let entrance = grid.entrance();
        let exit = grid.exit();
        grid.set(entrance, CellState::Aisle);
        grid.set(exit, CellState::Aisle);

        debug_assert_eq!(grid.count(CellState::Extending), 0);
        debug!(
            "generated {}x{} maze: {} extensions, {} steps, {} reverts",
            self.rows, self.cols, stats.extensions, stats.steps, stats.reverts
        );

        Ok((grid, stats))
    }

    /// Grows one wall run from `origin` until it touches an existing wall.
    ///
    /// Every cell on the run is held in `trail`, so committing or reverting
    /// only touches the cells that are currently extending.
    fn extend_wall<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        origin: Space,
        rng: &mut R,
        stats: &mut GenerationStats,
    ) -> MazeResult<()> {
        let mut trail: Vec<Space> = Vec::new();
        let mut cursor = origin;

        loop {
            match grid.get(cursor) {
                Some(CellState::Aisle) => {
                    grid.set(cursor, CellState::Extending);
                    trail.push(cursor);
                }
                Some(CellState::Wall) => {
                    for space in trail.drain(..) {
                        grid.set(space, CellState::Wall);
                    }
                    stats.extensions += 1;
                    return Ok(());
                }
                _ => {}
            }

            // (intermediate, two-ahead) for each direction whose two-ahead
            // cell is not already on this run
            let moves: Vec<(Space, Space)> = Direction::ALL
                .into_iter()
                .filter_map(|direction| {
                    let ahead = cursor.offset(direction, 2)?;
                    if grid.get(ahead)? == CellState::Extending {
                        return None;
                    }
                    Some((cursor.offset(direction, 1)?, ahead))
                })
                .collect();

            self.count_step(stats)?;

            match moves.choose(rng) {
                Some(&(through, ahead)) => {
                    grid.set(through, CellState::Extending);
                    trail.push(through);
                    cursor = ahead;
                }
                None => {
                    trace!("wall run from {origin:?} boxed in after {} cells", trail.len());
                    for space in trail.drain(..) {
                        grid.set(space, CellState::Aisle);
                    }
                    stats.reverts += 1;
                    cursor = origin;
                }
            }
        }
    }

    fn count_step(&self, stats: &mut GenerationStats) -> MazeResult<()> {
        stats.steps += 1;
        if stats.steps > self.step_limit {
            warn!(
                "wall extension on {}x{} stalled at {} steps",
                self.rows, self.cols, stats.steps
            );
            return Err(MazeError::GenerationStalled {
                steps: stats.steps,
                limit: self.step_limit,
            });
        }
        Ok(())
    }
}
