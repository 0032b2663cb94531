//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing grids, see [GridParseError](enum.GridParseError.html) for that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the specified coordinates (row and column) lie outside
    /// the 9x9 grid. This is the case if they are greater than or equal to 9.
    OutOfBounds,

    /// Indicates that some digit is invalid for the operation in question.
    /// For placements this is the case if it is less than 1 or greater than
    /// 9.
    InvalidNumber,

    /// Indicates that a requested carve count exceeds the number of cells in
    /// the grid, i.e. is greater than 81.
    InvalidCarveCount,

    /// An error that is raised when the backtracking fill exhausted all
    /// branches without completing the grid. On an initially empty grid this
    /// cannot happen; for partially filled grids it indicates the present
    /// digits admit no completion. The caller should retry with a fresh
    /// buffer.
    GenerationExhausted,

    /// Indicates that a player input was directed at a fixed cell, that is,
    /// a cell which holds one of the puzzle's clues. Fixed cells are never
    /// altered.
    FixedCell
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a
/// [Grid](../struct.Grid.html).
#[derive(Debug, Eq, PartialEq)]
pub enum GridParseError {

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal 81.
    WrongNumberOfCells,

    /// Indicates that one of the cell entries could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more
    /// than 9).
    InvalidNumber
}

impl Display for GridParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GridParseError::WrongNumberOfCells =>
                write!(f, "wrong number of cells"),
            GridParseError::NumberFormatError =>
                write!(f, "number format error"),
            GridParseError::InvalidNumber =>
                write!(f, "invalid number")
        }
    }
}

impl From<ParseIntError> for GridParseError {
    fn from(_: ParseIntError) -> Self {
        GridParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, GridParseError>`.
pub type GridParseResult<V> = Result<V, GridParseError>;
