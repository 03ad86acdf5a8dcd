//! The maze grid: cell states, spaces, and the rows x cols occupancy array.
//!
//! A [`Grid`] is produced by [`MazeGenerator`](super::generator::MazeGenerator)
//! and then only read. Row 0 is the top of the maze; rows grow downward.

use std::fmt;
use std::str::FromStr;

use crate::error::{MazeError, MazeResult};
use crate::math::Vec2;
use crate::math::coordinates::{MazeBounds, space_to_world, world_to_space};

/// State of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Solid block.
    Wall,
    /// Open floor.
    Aisle,
    /// Candidate wall on the run currently being extended. Never present in a
    /// finished grid.
    Extending,
}

/// Identifies a grid cell by row and column.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Space {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Space {
    /// Creates a new Space with the given coordinates
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rows x cols occupancy grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// All aisle, with a wall ring around the border.
    ///
    /// Callers validate that `rows * cols` fits in `usize`;
    /// [`MazeGenerator::new`](super::generator::MazeGenerator::new) does so
    /// before any grid is built.
    pub(crate) fn bordered(rows: usize, cols: usize) -> Self {
        let mut grid = Self {
            rows,
            cols,
            cells: vec![CellState::Aisle; rows * cols],
        };

        for col in 0..cols {
            grid.set(Space::new(0, col), CellState::Wall);
            grid.set(Space::new(rows - 1, col), CellState::Wall);
        }
        for row in 0..rows {
            grid.set(Space::new(row, 0), CellState::Wall);
            grid.set(Space::new(row, cols - 1), CellState::Wall);
        }

        grid
    }

    fn index(&self, space: Space) -> usize {
        space.row * self.cols + space.col
    }

    pub(crate) fn set(&mut self, space: Space, state: CellState) {
        let idx = self.index(space);
        self.cells[idx] = state;
    }

    /// Returns `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `space` lies inside the grid.
    pub fn contains(&self, space: Space) -> bool {
        space.row < self.rows && space.col < self.cols
    }

    /// State of the cell at `space`, or `None` outside the grid.
    pub fn get(&self, space: Space) -> Option<CellState> {
        self.contains(space).then(|| self.cells[self.index(space)])
    }

    /// State of the cell at `(row, col)`.
    ///
    /// Anything beyond the grid reads as [`CellState::Wall`], since agents
    /// cannot leave through solid ground.
    pub fn cell_state(&self, row: usize, col: usize) -> CellState {
        self.get(Space::new(row, col)).unwrap_or(CellState::Wall)
    }

    /// Whether `space` is a wall. `false` outside the grid.
    pub fn is_wall(&self, space: Space) -> bool {
        self.get(space) == Some(CellState::Wall)
    }

    /// Whether `space` is an aisle. `false` outside the grid.
    pub fn is_aisle(&self, space: Space) -> bool {
        self.get(space) == Some(CellState::Aisle)
    }

    /// The ingress cell on the bottom row, one column in from the right.
    pub fn entrance(&self) -> Space {
        Space::new(self.rows - 1, self.cols - 2)
    }

    /// The egress cell on the top row, one column in from the left.
    pub fn exit(&self) -> Space {
        Space::new(0, 1)
    }

    /// Every space in row-major order.
    pub fn spaces(&self) -> impl Iterator<Item = Space> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Space::new(row, col)))
    }

    /// Wall spaces in row-major order.
    pub fn wall_spaces(&self) -> impl Iterator<Item = Space> + '_ {
        self.spaces().filter(|&space| self.is_wall(space))
    }

    /// Aisle spaces in row-major order.
    pub fn aisle_spaces(&self) -> impl Iterator<Item = Space> + '_ {
        self.spaces().filter(|&space| self.is_aisle(space))
    }

    /// Number of aisle cells.
    pub fn aisle_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == CellState::Aisle).count()
    }

    pub(crate) fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// World position of `space` for blocks `cell_side` units wide.
    pub fn space_to_world(&self, space: Space, cell_side: f32) -> Vec2 {
        space_to_world(space, self.dimensions(), cell_side)
    }

    /// The space whose block covers `point`, if any.
    pub fn world_to_space(&self, point: Vec2, cell_side: f32) -> Option<Space> {
        world_to_space(point, self.dimensions(), cell_side)
    }

    /// Corner positions of this grid in the world.
    pub fn bounds(&self, cell_side: f32) -> MazeBounds {
        MazeBounds::new(self.dimensions(), cell_side)
    }

    /// World positions of every wall block, row-major.
    ///
    /// This is what a scene builder instantiates solid geometry at.
    pub fn wall_positions(&self, cell_side: f32) -> Vec<Vec2> {
        self.wall_spaces()
            .map(|space| self.space_to_world(space, cell_side))
            .collect()
    }
}

/// Renders the grid one character per cell: `#` wall, space aisle, `*` exit,
/// `o` entrance.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entrance = self.entrance();
        let exit = self.exit();

        for row in 0..self.rows {
            for col in 0..self.cols {
                let space = Space::new(row, col);
                let symbol = match self.cells[self.index(space)] {
                    CellState::Wall => '#',
                    CellState::Extending => '+',
                    CellState::Aisle if space == exit => '*',
                    CellState::Aisle if space == entrance => 'o',
                    CellState::Aisle => ' ',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the [`Display`](fmt::Display) form back into a grid.
///
/// `#` is a wall; space, `.`, `*` and `o` are aisles. Trailing blank lines are
/// ignored. Every line must have the same width, and both dimensions must be
/// at least 3.
impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(text: &str) -> MazeResult<Self> {
        let lines: Vec<&str> = text.trim_end_matches(['\n', '\r']).lines().collect();

        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.chars().count());
        if rows < 3 {
            return Err(MazeError::InvalidDimension {
                axis: "rows",
                requested: rows,
                normalized: rows,
            });
        }
        if cols < 3 {
            return Err(MazeError::InvalidDimension {
                axis: "cols",
                requested: cols,
                normalized: cols,
            });
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: cols,
                    found: width,
                });
            }

            for (col, c) in line.chars().enumerate() {
                let state = match c {
                    '#' => CellState::Wall,
                    ' ' | '.' | '*' | 'o' => CellState::Aisle,
                    found => return Err(MazeError::InvalidCell { row, col, found }),
                };
                cells.push(state);
            }
        }

        Ok(Self { rows, cols, cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bordered_grid() {
        let grid = Grid::bordered(5, 7);
        assert_eq!(grid.dimensions(), (5, 7));
        for space in grid.spaces() {
            let on_border =
                space.row == 0 || space.row == 4 || space.col == 0 || space.col == 6;
            assert_eq!(grid.is_wall(space), on_border, "{space:?}");
        }
        assert_eq!(grid.aisle_count(), 3 * 5);
    }

    #[test]
    fn test_out_of_bounds_reads_as_wall() {
        let grid = Grid::bordered(5, 5);
        assert_eq!(grid.get(Space::new(5, 0)), None);
        assert_eq!(grid.cell_state(9, 9), CellState::Wall);
        assert_eq!(grid.cell_state(2, 2), CellState::Aisle);
        assert!(!grid.is_wall(Space::new(0, 99)));
    }

    #[test]
    fn test_entrance_and_exit() {
        let grid = Grid::bordered(9, 11);
        assert_eq!(grid.entrance(), Space::new(8, 9));
        assert_eq!(grid.exit(), Space::new(0, 1));
    }

    #[test]
    fn test_display_and_parse() {
        let mut grid = Grid::bordered(5, 5);
        grid.set(grid.exit(), CellState::Aisle);
        grid.set(grid.entrance(), CellState::Aisle);
        grid.set(Space::new(2, 2), CellState::Wall);

        let text = grid.to_string();
        assert_eq!(text, "#*###\n#   #\n# # #\n#   #\n###o#\n");

        let parsed: Grid = text.parse().unwrap();
        assert_eq!(parsed, grid);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "###\n# x\n###".parse::<Grid>(),
            Err(MazeError::InvalidCell {
                row: 1,
                col: 2,
                found: 'x'
            })
        );
        assert_eq!(
            "###\n# ##\n###".parse::<Grid>(),
            Err(MazeError::RaggedRow {
                row: 1,
                expected: 3,
                found: 4
            })
        );
        assert!(matches!(
            "###\n###".parse::<Grid>(),
            Err(MazeError::InvalidDimension { axis: "rows", .. })
        ));
    }

    #[test]
    fn test_wall_positions() {
        let grid = Grid::bordered(3, 3);
        let positions = grid.wall_positions(2.0);
        assert_eq!(positions.len(), 8);
        assert_eq!(positions[0], Vec2::new(-2.0, 2.0));
        assert!(!positions.contains(&Vec2::new(0.0, 0.0)));
    }
}
