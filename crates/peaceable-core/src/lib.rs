//! Core data structures for the peaceable placement puzzle.
//!
//! This crate provides the board representation shared by the solver and the
//! console shell. It knows nothing about search; it only models a rectangular
//! grid of per-square eligibility states and the coordinate arithmetic the
//! solver needs.
//!
//! # Overview
//!
//! - [`cell`]: [`CellState`], the six-variant eligibility state of one square
//! - [`position`]: [`Position`], a 0-indexed (row, column) coordinate
//! - [`board`]: [`Board`], an owned row-major grid of cell states with value
//!   semantics, a predicate-driven position scan, and text rendering/parsing
//!
//! # Examples
//!
//! ```
//! use peaceable_core::{Board, CellState, Position};
//!
//! let mut board = Board::new(3, 3);
//! assert_eq!(board.get(0, 0), CellState::Available);
//!
//! board.set(Position::new(1, 2), CellState::Queen);
//! assert_eq!(board.get(1, 2), CellState::Queen);
//!
//! // Off-board lookups are a defined "absent" result, not an error.
//! assert_eq!(board.get_at(Position::new(5, 5)), None);
//! ```

pub mod board;
pub mod cell;
pub mod position;

pub use self::{
    board::{Board, ParseBoardError},
    cell::CellState,
    position::Position,
};
