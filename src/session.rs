//! This module contains the state of one play session: the puzzle, its
//! answer, the player's working grid, the timer, and the best completion
//! time.
//!
//! A [Session] holds the three grids of one puzzle together with the instant
//! at which play started. Resetting a session replaces the entire
//! puzzle/answer/user triple and the timer with freshly generated state; the
//! best time survives resets and only ever decreases. The record logic
//! itself is the pure function [maybe_update_best], so it can be tested
//! independently of any timer or rendering concern.

use crate::{Grid, is_complete_and_correct};
use crate::error::{SudokuError, SudokuResult};
use crate::generator::{DEFAULT_CARVE_COUNT, Generator};

use rand::Rng;

use std::time::Instant;

/// The result of checking a player's working grid against the answer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CheckOutcome {

    /// The working grid does not equal the answer in every cell. No
    /// information about which cells conflict is given.
    Incorrect,

    /// The working grid equals the answer in every cell.
    Cleared {

        /// The completion time in whole seconds.
        time: u64,

        /// Whether this completion set a new best time.
        new_record: bool
    }
}

/// Computes the new best time after a successful clear. The best time is
/// updated if and only if there is no previous best or the clear time is
/// strictly better.
///
/// # Arguments
///
/// * `best_time`: The best completion time in seconds recorded so far, if
/// any.
/// * `clear_time`: The completion time of the clear that just happened, in
/// seconds.
///
/// # Returns
///
/// A pair of the new best time, which is always present afterwards, and a
/// flag indicating whether the clear set a new record.
pub fn maybe_update_best(best_time: Option<u64>, clear_time: u64)
        -> (Option<u64>, bool) {
    match best_time {
        Some(best) if best <= clear_time => (Some(best), false),
        _ => (Some(clear_time), true)
    }
}

/// The state of one play session. It owns the puzzle, the answer, and the
/// player's working grid, plus the timer start instant and the best
/// completion time in seconds.
///
/// The working grid starts as a copy of the puzzle. Cells that hold a clue
/// in the puzzle are *fixed* and can never be altered through
/// [Session::enter]; all other cells are editable and may hold 0, meaning
/// not yet filled.
pub struct Session {
    puzzle: Grid,
    answer: Grid,
    user: Grid,
    started: Instant,
    best_time: Option<u64>,
    carve_count: usize
}

impl Session {

    /// Creates a new session by generating a puzzle with the default carve
    /// count and starting the timer.
    ///
    /// # Arguments
    ///
    /// * `generator`: The [Generator] used to produce the puzzle and answer.
    ///
    /// # Errors
    ///
    /// Any error raised by [Generator::generate_puzzle].
    pub fn new<R: Rng>(generator: &mut Generator<R>) -> SudokuResult<Session> {
        Session::new_with_carve_count(generator, DEFAULT_CARVE_COUNT)
    }

    /// Creates a new session by generating a puzzle with the given carve
    /// count and starting the timer. The carve count is remembered and
    /// reused by [Session::reset].
    ///
    /// # Arguments
    ///
    /// * `generator`: The [Generator] used to produce the puzzle and answer.
    /// * `carve_count`: The number of cells removed from the answer to form
    /// the puzzle. Must be less than or equal to 81.
    ///
    /// # Errors
    ///
    /// Any error raised by [Generator::generate_puzzle_with].
    pub fn new_with_carve_count<R: Rng>(generator: &mut Generator<R>,
            carve_count: usize) -> SudokuResult<Session> {
        let (puzzle, answer) = generator.generate_puzzle_with(carve_count)?;
        let user = puzzle.clone();

        Ok(Session {
            puzzle,
            answer,
            user,
            started: Instant::now(),
            best_time: None,
            carve_count
        })
    }

    /// Replaces the puzzle, answer, and working grid with freshly generated
    /// state and restarts the timer. The best time is kept. On error, the
    /// session remains unchanged.
    ///
    /// # Arguments
    ///
    /// * `generator`: The [Generator] used to produce the new puzzle and
    /// answer.
    ///
    /// # Errors
    ///
    /// Any error raised by [Generator::generate_puzzle_with].
    pub fn reset<R: Rng>(&mut self, generator: &mut Generator<R>)
            -> SudokuResult<()> {
        let (puzzle, answer) =
            generator.generate_puzzle_with(self.carve_count)?;

        self.user = puzzle.clone();
        self.puzzle = puzzle;
        self.answer = answer;
        self.started = Instant::now();
        Ok(())
    }

    /// Gets a reference to the puzzle grid, i.e. the clues. Cells holding 0
    /// are the player-editable cells.
    pub fn puzzle(&self) -> &Grid {
        &self.puzzle
    }

    /// Gets a reference to the answer grid, i.e. the full solution from
    /// which the puzzle was carved.
    pub fn answer(&self) -> &Grid {
        &self.answer
    }

    /// Gets a reference to the player's working grid.
    pub fn user(&self) -> &Grid {
        &self.user
    }

    /// Gets the best completion time in seconds recorded in this session so
    /// far, if any.
    pub fn best_time(&self) -> Option<u64> {
        self.best_time
    }

    /// Gets the number of whole seconds elapsed since this session's puzzle
    /// was generated.
    pub fn elapsed(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    /// Indicates whether the cell at the specified position is fixed, that
    /// is, holds one of the puzzle's clues. Fixed cells cannot be altered by
    /// [Session::enter].
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn is_fixed(&self, row: usize, column: usize) -> SudokuResult<bool> {
        Ok(self.puzzle.get(row, column)? != 0)
    }

    /// Applies a player input to the working grid. A digit from 1 to 9 is
    /// written to the specified cell, 0 clears it. Fixed cells are never
    /// altered; attempting to write to one is rejected.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `digit`: The digit to enter, where 0 clears the cell. Must be in
    /// the range `[0, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `digit` is greater than 9.
    /// * `SudokuError::FixedCell` If the specified cell is fixed.
    pub fn enter(&mut self, row: usize, column: usize, digit: u8)
            -> SudokuResult<()> {
        if self.is_fixed(row, column)? {
            return Err(SudokuError::FixedCell);
        }

        if digit == 0 {
            self.user.clear(row, column)
        }
        else {
            self.user.set(row, column, digit)
        }
    }

    /// Checks the working grid against the answer. If every cell matches,
    /// the completion time is computed from the session timer and the best
    /// time is updated if the clear was strictly faster than the previous
    /// best (see [maybe_update_best]). Otherwise, the working grid is simply
    /// reported as incorrect; an incomplete grid is not an error.
    pub fn check(&mut self) -> CheckOutcome {
        if !is_complete_and_correct(&self.user, &self.answer) {
            return CheckOutcome::Incorrect;
        }

        let clear_time = self.elapsed();
        let (best_time, new_record) =
            maybe_update_best(self.best_time, clear_time);
        self.best_time = best_time;

        CheckOutcome::Cleared {
            time: clear_time,
            new_record
        }
    }
}
