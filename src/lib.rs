// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements a small, easy-to-understand engine for timed 9x9
//! Sudoku play. It supports the following key features:
//!
//! * Parsing and printing 9x9 Sudoku grids
//! * Checking validity of digit placements according to standard rules
//! * Generating random puzzles by filling a grid with a randomized
//! backtracking search and carving out a configurable number of cells
//! * Verifying a submitted solution against the generated answer
//! * Tracking elapsed time and the best completion time across puzzles of
//! one session
//!
//! # Parsing and printing grids
//!
//! See [Grid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and
//! display a grid is provided below.
//!
//! ```
//! use sudoku_rush::Grid;
//!
//! let grid = Grid::parse("\
//!     5,3, , ,7, , , , ,\
//!     6, , ,1,9,5, , , ,\
//!      ,9,8, , , , ,6, ,\
//!     8, , , ,6, , , ,3,\
//!     4, , ,8, ,3, , ,1,\
//!     7, , , ,2, , , ,6,\
//!      ,6, , , , ,2,8, ,\
//!      , , ,4,1,9, , ,5,\
//!      , , , ,8, , ,7,9").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Generating puzzles
//!
//! A [Generator](generator::Generator) wraps a random number generator from
//! the [rand](https://rust-random.github.io/rand/rand/index.html) crate and
//! produces a puzzle together with its answer. The puzzle is the answer with
//! a fixed number of cells carved out (set to 0), which are exactly the
//! cells the player may edit.
//!
//! ```
//! use sudoku_rush::check;
//! use sudoku_rush::generator::Generator;
//!
//! // new_default yields a generator with rand::thread_rng()
//! let mut generator = Generator::new_default();
//! let (puzzle, answer) = generator.generate_puzzle().unwrap();
//!
//! assert!(answer.is_full());
//! assert!(check::is_valid_grid(&answer));
//! assert_eq!(36, puzzle.count_clues());
//! ```
//!
//! # Verifying solutions
//!
//! Verification is an all-or-nothing, cell-by-cell comparison of the
//! player's working grid against the answer, provided by
//! [is_complete_and_correct].
//!
//! # Timed play
//!
//! The [Session](session::Session) type owns the puzzle/answer/user grid
//! triple together with a timer instant and the best completion time. See
//! the [session] module for details.

pub mod check;
pub mod error;
pub mod generator;
pub mod session;

use error::{GridParseError, GridParseResult, SudokuError, SudokuResult};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of rows and columns of a grid.
pub const SIZE: usize = 9;

/// The number of rows and columns of one block of a grid.
pub const BLOCK: usize = 3;

/// The total number of cells of a grid.
pub const CELLS: usize = SIZE * SIZE;

pub(crate) fn index(row: usize, column: usize) -> usize {
    row * SIZE + column
}

/// A 9x9 Sudoku grid of digits, stored in row-major order. Each cell holds a
/// digit from 1 to 9 or the value 0, which denotes an empty cell.
///
/// Three grids make up one puzzle: the *answer*, which is fully solved, the
/// *puzzle*, which is the answer with some cells set to 0, and the *user*
/// grid, the player's working copy of the puzzle. A cell is fixed if and
/// only if the puzzle holds a non-zero digit there.
///
/// `Grid` implements `Display` and is rendered with box-drawing characters,
/// where thick lines separate the 3x3 blocks.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "Vec<u8>")]
#[serde(try_from = "Vec<u8>")]
pub struct Grid {
    cells: Vec<u8>
}

fn to_char(cell: u8) -> char {
    if cell == 0 {
        ' '
    }
    else {
        (b'0' + cell) as char
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &Grid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.cells[index(y, x)]), ' ', '║', true)
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BLOCK == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

fn to_string(cell: &u8) -> String {
    if *cell == 0 {
        String::from("")
    }
    else {
        cell.to_string()
    }
}

impl Grid {

    /// Creates a new, empty grid in which all 81 cells are 0.
    pub fn new() -> Grid {
        Grid {
            cells: vec![0; CELLS]
        }
    }

    /// Creates a grid from a vector of 81 cell values in row-major order,
    /// where 0 denotes an empty cell.
    ///
    /// # Errors
    ///
    /// * `GridParseError::WrongNumberOfCells` If `cells` does not contain
    /// exactly 81 entries.
    /// * `GridParseError::InvalidNumber` If any entry is greater than 9.
    pub fn from_cells(cells: Vec<u8>) -> GridParseResult<Grid> {
        if cells.len() != CELLS {
            return Err(GridParseError::WrongNumberOfCells);
        }

        if cells.iter().any(|&c| c > 9) {
            return Err(GridParseError::InvalidNumber);
        }

        Ok(Grid {
            cells
        })
    }

    /// Parses a code encoding a grid. The code is a comma-separated list of
    /// 81 entries, which are either empty or a digit from 1 to 9. The
    /// entries are assigned left-to-right, top-to-bottom, where each row is
    /// completed before the next one is started. Whitespace in the entries
    /// is ignored to allow for more intuitive formatting.
    ///
    /// # Errors
    ///
    /// Any specialization of `GridParseError` (see that documentation).
    pub fn parse(code: &str) -> GridParseResult<Grid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELLS {
            return Err(GridParseError::WrongNumberOfCells);
        }

        let mut grid = Grid::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let number = entry.parse::<u8>()?;

            if number == 0 || number > 9 {
                return Err(GridParseError::InvalidNumber);
            }

            grid.cells[i] = number;
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [Grid::parse](#method.parse). That is, a grid that is converted to a
    /// string and parsed again will not change.
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position. 0 denotes an
    /// empty cell.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get(&self, row: usize, column: usize) -> SudokuResult<u8> {
        if row >= SIZE || column >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(row, column)])
        }
    }

    /// Indicates whether the cell at the specified position holds the given
    /// digit. This will return `false` if there is a different digit in that
    /// cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `digit`: The digit to check for. If it is *not* in the range
    /// `[1, 9]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_digit(&self, row: usize, column: usize, digit: u8)
            -> SudokuResult<bool> {
        let content = self.get(row, column)?;
        Ok(content != 0 && content == digit)
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `digit`: The digit to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `digit` is not in the specified
    /// range.
    pub fn set(&mut self, row: usize, column: usize, digit: u8)
            -> SudokuResult<()> {
        if row >= SIZE || column >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if digit == 0 || digit > 9 {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(row, column)] = digit;
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a digit, that digit is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear(&mut self, row: usize, column: usize) -> SudokuResult<()> {
        if row >= SIZE || column >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(row, column)] = 0;
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-zero cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// digit. In this case, [Grid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|&c| c == 0)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// digit. In this case, [Grid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<u8> {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new()
    }
}

impl From<Grid> for Vec<u8> {
    fn from(grid: Grid) -> Vec<u8> {
        grid.cells
    }
}

impl TryFrom<Vec<u8>> for Grid {
    type Error = GridParseError;

    fn try_from(cells: Vec<u8>) -> GridParseResult<Grid> {
        Grid::from_cells(cells)
    }
}

/// Indicates whether the given working grid is a complete and correct
/// solution to the puzzle whose answer is given. This is an all-or-nothing,
/// cell-by-cell comparison over all 81 positions. Since the answer is full
/// and satisfies the Sudoku constraints, equality implies the working grid
/// does too.
///
/// No information about which cells conflict is produced.
pub fn is_complete_and_correct(user: &Grid, answer: &Grid) -> bool {
    user.cells == answer.cells
}

#[cfg(test)]
mod tests {

    use super::*;

    pub(crate) const EXAMPLE_ANSWER: &str = "\
        5,3,4,6,7,8,9,1,2,\
        6,7,2,1,9,5,3,4,8,\
        1,9,8,3,4,2,5,6,7,\
        8,5,9,7,6,1,4,2,3,\
        4,2,6,8,5,3,7,9,1,\
        7,1,3,9,2,4,8,5,6,\
        9,6,1,5,3,7,2,8,4,\
        2,8,7,4,1,9,6,3,5,\
        3,4,5,2,8,6,1,7,9";

    pub(crate) const EXAMPLE_PUZZLE: &str = "\
        5,3, , ,7, , , , ,\
        6, , ,1,9,5, , , ,\
         ,9,8, , , , ,6, ,\
        8, , , ,6, , , ,3,\
        4, , ,8, ,3, , ,1,\
        7, , , ,2, , , ,6,\
         ,6, , , , ,2,8, ,\
         , , ,4,1,9, , ,5,\
         , , , ,8, , ,7,9";

    #[test]
    fn parse_ok() {
        let grid = Grid::parse(EXAMPLE_PUZZLE).unwrap();

        assert_eq!(5, grid.get(0, 0).unwrap());
        assert_eq!(3, grid.get(0, 1).unwrap());
        assert_eq!(0, grid.get(0, 2).unwrap());
        assert_eq!(7, grid.get(0, 4).unwrap());
        assert_eq!(9, grid.get(2, 1).unwrap());
        assert_eq!(9, grid.get(8, 8).unwrap());
        assert_eq!(0, grid.get(8, 0).unwrap());
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(GridParseError::WrongNumberOfCells),
            Grid::parse("1,2,3"));

        let mut code = EXAMPLE_PUZZLE.to_owned();
        code.push_str(",1");
        assert_eq!(Err(GridParseError::WrongNumberOfCells),
            Grid::parse(code.as_str()));
    }

    #[test]
    fn parse_number_format_error() {
        let code = EXAMPLE_PUZZLE.replace("5,3", "5,#");
        assert_eq!(Err(GridParseError::NumberFormatError),
            Grid::parse(code.as_str()));
    }

    #[test]
    fn parse_invalid_number() {
        let code = EXAMPLE_PUZZLE.replace("5,3", "5,0");
        assert_eq!(Err(GridParseError::InvalidNumber),
            Grid::parse(code.as_str()));

        let code = EXAMPLE_PUZZLE.replace("5,3", "5,10");
        assert_eq!(Err(GridParseError::InvalidNumber),
            Grid::parse(code.as_str()));
    }

    #[test]
    fn to_parseable_string_round_trip() {
        let grid = Grid::parse(EXAMPLE_PUZZLE).unwrap();
        let code = grid.to_parseable_string();
        assert_eq!(grid, Grid::parse(code.as_str()).unwrap());

        let mut grid = Grid::new();
        grid.set(0, 0, 1).unwrap();
        grid.set(4, 4, 5).unwrap();
        grid.set(8, 8, 9).unwrap();
        let code = grid.to_parseable_string();
        assert_eq!(grid, Grid::parse(code.as_str()).unwrap());
    }

    #[test]
    fn from_cells_validates() {
        assert_eq!(Err(GridParseError::WrongNumberOfCells),
            Grid::from_cells(vec![0; 80]));
        assert_eq!(Err(GridParseError::InvalidNumber),
            Grid::from_cells(vec![10; 81]));

        let grid = Grid::from_cells(vec![0; 81]).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn cell_access_bounds() {
        let mut grid = Grid::new();

        assert_eq!(Err(SudokuError::OutOfBounds), grid.get(9, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.get(0, 9));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set(9, 0, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.clear(0, 9));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set(0, 0, 10));
    }

    #[test]
    fn set_and_clear() {
        let mut grid = Grid::new();

        grid.set(3, 7, 4).unwrap();
        assert_eq!(4, grid.get(3, 7).unwrap());
        assert!(grid.has_digit(3, 7, 4).unwrap());
        assert!(!grid.has_digit(3, 7, 5).unwrap());
        assert!(!grid.has_digit(0, 0, 4).unwrap());

        grid.clear(3, 7).unwrap();
        assert_eq!(0, grid.get(3, 7).unwrap());
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = Grid::new();
        let partial = Grid::parse(EXAMPLE_PUZZLE).unwrap();
        let full = Grid::parse(EXAMPLE_ANSWER).unwrap();

        assert_eq!(0, empty.count_clues());
        assert_eq!(30, partial.count_clues());
        assert_eq!(81, full.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!full.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
    }

    #[test]
    fn display_renders_blocks() {
        let grid = Grid::parse(EXAMPLE_PUZZLE).unwrap();
        let rendered = format!("{}", grid);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(19, lines.len());
        assert_eq!("╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗", lines[0]);
        assert_eq!("║ 5 │ 3 │   ║   │ 7 │   ║   │   │   ║", lines[1]);
        assert_eq!("╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣", lines[6]);
        assert_eq!("╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝", lines[18]);
    }

    #[test]
    fn serde_round_trip() {
        let grid = Grid::parse(EXAMPLE_PUZZLE).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let parsed: Grid = serde_json::from_str(json.as_str()).unwrap();
        assert_eq!(grid, parsed);
    }

    #[test]
    fn serde_rejects_invalid_cells() {
        let json = serde_json::to_string(&vec![10u8; 81]).unwrap();
        assert!(serde_json::from_str::<Grid>(json.as_str()).is_err());

        let json = serde_json::to_string(&vec![1u8; 80]).unwrap();
        assert!(serde_json::from_str::<Grid>(json.as_str()).is_err());
    }

    #[test]
    fn verification_accepts_answer_itself() {
        let answer = Grid::parse(EXAMPLE_ANSWER).unwrap();
        assert!(is_complete_and_correct(&answer, &answer));
    }

    #[test]
    fn verification_rejects_single_deviation() {
        let answer = Grid::parse(EXAMPLE_ANSWER).unwrap();

        for row in 0..SIZE {
            for column in 0..SIZE {
                let mut user = answer.clone();
                let correct = answer.get(row, column).unwrap();
                let wrong = correct % 9 + 1;
                user.set(row, column, wrong).unwrap();
                assert!(!is_complete_and_correct(&user, &answer));
            }
        }
    }

    #[test]
    fn verification_rejects_incomplete_grid() {
        let answer = Grid::parse(EXAMPLE_ANSWER).unwrap();
        let mut user = answer.clone();
        user.clear(4, 4).unwrap();
        assert!(!is_complete_and_correct(&user, &answer));
    }
}
