//! Test helpers for search assertions.
//!
//! [`SearchTester`] runs one search and exposes chained assertions over the
//! outcome, so tests read as a statement of the expected result rather than
//! a pile of bookkeeping.

use std::str::FromStr as _;

use peaceable_core::{Board, CellState, Position};

/// Fluent harness around [`solve`](crate::solve).
///
/// All assertion methods panic with detailed messages on failure and use
/// `#[track_caller]` so the failing test line is reported.
#[derive(Debug)]
pub struct SearchTester {
    solution: Option<Board>,
}

impl SearchTester {
    /// Runs the search on a fresh `rows` x `columns` board.
    pub fn solve(rows: usize, columns: usize, queens: usize, knights: usize) -> Self {
        let solution = crate::solve(Board::new(rows, columns), queens, knights);
        Self { solution }
    }

    /// Asserts the search exhausted without finding a solution.
    #[track_caller]
    pub fn assert_no_solution(self) {
        if let Some(board) = &self.solution {
            panic!("expected exhaustion, but found a solution:\n{}", board.render(true));
        }
    }

    /// Asserts a solution exists with exactly the given piece counts.
    #[track_caller]
    pub fn assert_piece_counts(self, queens: usize, knights: usize) -> Self {
        let board = self.board();
        let queen_count = board.positions_where(|state| state.is_queen()).count();
        let knight_count = board.positions_where(|state| state.is_knight()).count();
        assert_eq!(
            (queen_count, knight_count),
            (queens, knights),
            "expected {queens} queens and {knights} knights on:\n{}",
            board.render(true)
        );
        self
    }

    /// Asserts no piece on the solution attacks any other.
    #[track_caller]
    pub fn assert_peaceful(self) -> Self {
        let board = self.board();
        let pieces: Vec<(Position, CellState)> = board
            .positions_where(|state| state.is_queen() || state.is_knight())
            .map(|pos| (pos, board.get(pos.row(), pos.column())))
            .collect();

        for (i, &(a_pos, a_state)) in pieces.iter().enumerate() {
            for &(b_pos, b_state) in &pieces[i + 1..] {
                let queen_involved = a_state.is_queen() || b_state.is_queen();
                let knight_involved = a_state.is_knight() || b_state.is_knight();
                assert!(
                    !(queen_involved && queen_reaches(a_pos, b_pos)),
                    "{a_state:?} at {a_pos} and {b_state:?} at {b_pos} share a queen line:\n{}",
                    board.render(true)
                );
                assert!(
                    !(knight_involved && knight_reaches(a_pos, b_pos)),
                    "{a_state:?} at {a_pos} and {b_state:?} at {b_pos} are a knight move apart:\n{}",
                    board.render(true)
                );
            }
        }
        self
    }

    /// Asserts the solution's piece placement matches an expected grid.
    ///
    /// The expected text uses the board parse format; only `Q` and `N` cells
    /// are compared, so `.` reads naturally as "no piece here".
    #[track_caller]
    pub fn assert_matches(self, expected: &str) -> Self {
        let expected = Board::from_str(expected).expect("expected grid must parse");
        let board = self.board();
        assert_eq!(
            (board.rows(), board.columns()),
            (expected.rows(), expected.columns()),
            "solution dimensions differ from the expected grid"
        );

        for row in 0..board.rows() {
            for column in 0..board.columns() {
                let actual = board.get(row, column);
                let wanted = expected.get(row, column);
                let actual_piece = actual.is_queen() || actual.is_knight();
                let wanted_piece = wanted.is_queen() || wanted.is_knight();
                assert!(
                    actual_piece == wanted_piece && (!wanted_piece || actual == wanted),
                    "expected {wanted:?} at {}, found {actual:?}:\n{}",
                    Position::new(row, column),
                    board.render(true)
                );
            }
        }
        self
    }

    #[track_caller]
    fn board(&self) -> &Board {
        self.solution
            .as_ref()
            .expect("expected a solution, but the search was exhausted")
    }
}

fn queen_reaches(a: Position, b: Position) -> bool {
    let row_diff = a.row().abs_diff(b.row());
    let column_diff = a.column().abs_diff(b.column());
    row_diff == 0 || column_diff == 0 || row_diff == column_diff
}

fn knight_reaches(a: Position, b: Position) -> bool {
    let row_diff = a.row().abs_diff(b.row());
    let column_diff = a.column().abs_diff(b.column());
    (row_diff == 1 && column_diff == 2) || (row_diff == 2 && column_diff == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queen_reaches_lines_only() {
        let origin = Position::new(2, 2);
        assert!(queen_reaches(origin, Position::new(2, 0)));
        assert!(queen_reaches(origin, Position::new(0, 2)));
        assert!(queen_reaches(origin, Position::new(0, 0)));
        assert!(queen_reaches(origin, Position::new(4, 0)));
        assert!(!queen_reaches(origin, Position::new(0, 1)));
        assert!(!queen_reaches(origin, Position::new(3, 0)));
    }

    #[test]
    fn test_knight_reaches_offsets_only() {
        let origin = Position::new(2, 2);
        assert!(knight_reaches(origin, Position::new(0, 1)));
        assert!(knight_reaches(origin, Position::new(3, 4)));
        assert!(knight_reaches(origin, Position::new(4, 1)));
        assert!(!knight_reaches(origin, Position::new(2, 3)));
        assert!(!knight_reaches(origin, Position::new(4, 4)));
        assert!(!knight_reaches(origin, origin));
    }

    #[test]
    #[should_panic(expected = "expected a solution")]
    fn test_board_access_panics_on_exhaustion() {
        SearchTester::solve(1, 1, 2, 0).assert_piece_counts(2, 0);
    }
}
