//! Error types for maze construction and parsing.

/// Errors produced while building or reading a maze grid.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A dimension is too small to hold an interior once made odd.
    #[error("invalid {axis} count {requested}: normalized to {normalized}, need at least 3")]
    InvalidDimension {
        /// Which dimension was rejected (`"rows"` or `"cols"`).
        axis: &'static str,
        /// The value the caller asked for.
        requested: usize,
        /// The value after rounding down to odd.
        normalized: usize,
    },

    /// The cell count or its step limit does not fit in `usize`.
    #[error("a {rows}x{cols} grid is too large to generate")]
    GridTooLarge {
        /// Normalized row count.
        rows: usize,
        /// Normalized column count.
        cols: usize,
    },

    /// Wall extension ran past its step limit.
    #[error("wall extension stalled after {steps} steps (limit {limit})")]
    GenerationStalled {
        /// Steps taken when the limit was hit.
        steps: usize,
        /// The configured limit.
        limit: usize,
    },

    /// A character in maze text that is neither a wall nor an aisle.
    #[error("unexpected {found:?} at row {row}, col {col}")]
    InvalidCell {
        /// Row of the offending character.
        row: usize,
        /// Column of the offending character.
        col: usize,
        /// The character itself.
        found: char,
    },

    /// A line of maze text whose length differs from the first line.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Row index of the short or long line.
        row: usize,
        /// Width of the first line.
        expected: usize,
        /// Width of this line.
        found: usize,
    },
}

/// Result alias used throughout the crate.
pub type MazeResult<T> = Result<T, MazeError>;
