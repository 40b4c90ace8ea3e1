//! Backtracking search for peaceable queen and knight placements.
//!
//! Placing a piece never mutates the board it was proposed on: [`place_queen`]
//! and [`place_knight`] derive a fresh child board with the placement's attack
//! consequences propagated, and [`solve`] walks those children depth-first
//! until the requested piece counts are reached or the candidate space is
//! exhausted.
//!
//! # Examples
//!
//! ```
//! use peaceable_core::Board;
//! use peaceable_solver::solve;
//!
//! let solution = solve(Board::new(4, 4), 2, 0).expect("two queens fit on 4x4");
//! println!("{solution}");
//! ```

pub use self::{placement::*, search::*};

mod placement;
mod search;

#[cfg(test)]
mod testing;
