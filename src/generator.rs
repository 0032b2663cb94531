//! This module contains logic for generating random Sudoku puzzles.
//!
//! Generation is done by first filling an empty grid with a randomized
//! backtracking search and then carving out a fixed number of cells, which
//! become the cells the player has to fill in. Both steps are driven by a
//! [Generator], which wraps the random number generator deciding shuffle
//! order and carved positions.
//!
//! There is no guarantee that a carved puzzle has a *unique* solution.

use crate::{CELLS, Grid, SIZE};
use crate::check;
use crate::error::{SudokuError, SudokuResult};

use rand::Rng;
use rand::rngs::ThreadRng;

/// The default number of cells that are carved out of a full answer grid to
/// form a puzzle. Lower values yield denser puzzles with more clues.
pub const DEFAULT_CARVE_COUNT: usize = 45;

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

/// A generator randomly generates full answer [Grid]s and carves puzzles out
/// of them. It uses a random number generator to decide the content. For
/// most cases, sensible defaults are provided by [Generator::new_default];
/// tests can inject a seeded generator for reproducible output.
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, grid: &mut Grid, row: usize, column: usize)
            -> bool {
        if row == SIZE {
            return true;
        }

        let next_column = (column + 1) % SIZE;
        let next_row = if next_column == 0 { row + 1 } else { row };

        if grid.get(row, column).unwrap() != 0 {
            return self.fill_rec(grid, next_row, next_column);
        }

        for digit in shuffle(&mut self.rng, 1..=9) {
            if check::is_valid_unchecked(grid, row, column, digit) {
                grid.set(row, column, digit).unwrap();

                if self.fill_rec(grid, next_row, next_column) {
                    return true;
                }

                grid.clear(row, column).unwrap();
            }
        }

        false
    }

    /// Fills the given [Grid] with random digits that satisfy the Sudoku
    /// constraints and match all already present digits. If that is not
    /// possible, an error will be returned.
    ///
    /// If no error is returned, it is guaranteed that the grid is full and
    /// [check::is_valid_grid] returns `true` after this operation.
    /// Otherwise, it remains unchanged. On an empty grid this operation
    /// always succeeds.
    ///
    /// Cells are visited in row-major order and candidate digits are tried
    /// in a freshly shuffled order per cell, so repeated fills of an empty
    /// grid yield different answers (up to the wrapped random number
    /// generator).
    ///
    /// # Arguments
    ///
    /// * `grid`: The grid to fill with random digits. Must not be shared
    /// with a concurrently running generation attempt.
    ///
    /// # Errors
    ///
    /// * `SudokuError::GenerationExhausted` If there is no set of digits
    /// that completes the grid without changing digits already present.
    pub fn fill(&mut self, grid: &mut Grid) -> SudokuResult<()> {
        if self.fill_rec(grid, 0, 0) {
            Ok(())
        }
        else {
            Err(SudokuError::GenerationExhausted)
        }
    }

    fn carve(&mut self, puzzle: &mut Grid, carve_count: usize) {
        let mut remaining = carve_count;

        while remaining > 0 {
            let row = self.rng.gen_range(0..SIZE);
            let column = self.rng.gen_range(0..SIZE);

            if puzzle.get(row, column).unwrap() != 0 {
                puzzle.clear(row, column).unwrap();
                remaining -= 1;
            }
        }
    }

    /// Generates a new puzzle with the given carve count, that is, the
    /// number of cells removed from the full answer grid. A freshly filled
    /// answer is generated first, then exactly `carve_count` distinct,
    /// uniformly chosen cells are set to 0 in a copy of it. All other cells
    /// of the puzzle retain the answer's digit.
    ///
    /// Note that the resulting puzzle is *not* checked for having a unique
    /// solution. Multiple valid completions may exist, of which the returned
    /// answer is one.
    ///
    /// # Arguments
    ///
    /// * `carve_count`: The number of cells to remove from the answer. Must
    /// be less than or equal to 81.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidCarveCount` If `carve_count` is greater than
    /// 81.
    ///
    /// # Returns
    ///
    /// A pair `(puzzle, answer)`. The caller derives the initial working
    /// grid as a copy of `puzzle`.
    pub fn generate_puzzle_with(&mut self, carve_count: usize)
            -> SudokuResult<(Grid, Grid)> {
        if carve_count > CELLS {
            return Err(SudokuError::InvalidCarveCount);
        }

        let mut answer = Grid::new();
        self.fill(&mut answer)?;

        let mut puzzle = answer.clone();
        self.carve(&mut puzzle, carve_count);

        Ok((puzzle, answer))
    }

    /// Generates a new puzzle with the default carve count of
    /// [DEFAULT_CARVE_COUNT] cells. See [Generator::generate_puzzle_with]
    /// for details.
    ///
    /// # Returns
    ///
    /// A pair `(puzzle, answer)`. The caller derives the initial working
    /// grid as a copy of `puzzle`.
    pub fn generate_puzzle(&mut self) -> SudokuResult<(Grid, Grid)> {
        self.generate_puzzle_with(DEFAULT_CARVE_COUNT)
    }
}
