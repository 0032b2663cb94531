//! This module contains the constraint checks applied to grids, that is,
//! digit uniqueness in each row, each column, and each 3x3 block.
//!
//! The central operation is [is_valid], which decides whether placing a
//! digit at a cell would violate one of these constraints. It is used by the
//! [generator](crate::generator) during backtracking and can serve as an
//! input-validity hint for a frontend.

use crate::{BLOCK, Grid, SIZE, index};
use crate::error::{SudokuError, SudokuResult};

fn in_row(grid: &Grid, row: usize, digit: u8) -> bool {
    (0..SIZE).any(|column| grid.cells()[index(row, column)] == digit)
}

fn in_column(grid: &Grid, column: usize, digit: u8) -> bool {
    (0..SIZE).any(|row| grid.cells()[index(row, column)] == digit)
}

fn in_block(grid: &Grid, row: usize, column: usize, digit: u8) -> bool {
    let block_row = (row / BLOCK) * BLOCK;
    let block_column = (column / BLOCK) * BLOCK;

    (block_row..(block_row + BLOCK))
        .any(|r| (block_column..(block_column + BLOCK))
            .any(|c| grid.cells()[index(r, c)] == digit))
}

pub(crate) fn is_valid_unchecked(grid: &Grid, row: usize, column: usize,
        digit: u8) -> bool {
    !in_row(grid, row, digit) &&
        !in_column(grid, column, digit) &&
        !in_block(grid, row, column, digit)
}

/// Indicates whether the given digit could be placed at the specified cell
/// without violating the Sudoku constraints. That is, `false` is returned if
/// `digit` already appears anywhere in the cell's row, its column, or the
/// 3x3 block containing it, and `true` otherwise. The grid is not mutated
/// and the content of the queried cell itself is not considered.
///
/// # Arguments
///
/// * `grid`: The grid in which to check the placement. May contain empty
/// cells.
/// * `row`: The row (y-coordinate) of the checked cell. Must be in the range
/// `[0, 9[`.
/// * `column`: The column (x-coordinate) of the checked cell. Must be in the
/// range `[0, 9[`.
/// * `digit`: The digit whose placement to check. Must be in the range
/// `[1, 9]`.
///
/// # Errors
///
/// * `SudokuError::OutOfBounds` If either `row` or `column` are not in the
/// specified range.
/// * `SudokuError::InvalidNumber` If `digit` is not in the specified range.
pub fn is_valid(grid: &Grid, row: usize, column: usize, digit: u8)
        -> SudokuResult<bool> {
    if row >= SIZE || column >= SIZE {
        return Err(SudokuError::OutOfBounds);
    }

    if digit == 0 || digit > 9 {
        return Err(SudokuError::InvalidNumber);
    }

    Ok(is_valid_unchecked(grid, row, column, digit))
}

fn unit_free_of_duplicates(cells: impl Iterator<Item = u8>) -> bool {
    let mut seen = [false; SIZE + 1];

    for cell in cells {
        if cell != 0 {
            if seen[cell as usize] {
                return false;
            }

            seen[cell as usize] = true;
        }
    }

    true
}

/// Indicates whether the entire grid is consistent with the Sudoku
/// constraints, i.e. no row, column, or 3x3 block contains a duplicate
/// digit. Empty cells are permitted, so a partially filled grid can be
/// valid. For a full grid, validity means every row, column, and block is a
/// permutation of the digits 1 to 9.
pub fn is_valid_grid(grid: &Grid) -> bool {
    for row in 0..SIZE {
        if !unit_free_of_duplicates(
                (0..SIZE).map(|column| grid.cells()[index(row, column)])) {
            return false;
        }
    }

    for column in 0..SIZE {
        if !unit_free_of_duplicates(
                (0..SIZE).map(|row| grid.cells()[index(row, column)])) {
            return false;
        }
    }

    for block in 0..SIZE {
        let block_row = (block / BLOCK) * BLOCK;
        let block_column = (block % BLOCK) * BLOCK;
        let cells = (0..SIZE).map(|i| {
            let row = block_row + i / BLOCK;
            let column = block_column + i % BLOCK;
            grid.cells()[index(row, column)]
        });

        if !unit_free_of_duplicates(cells) {
            return false;
        }
    }

    true
}
