//! Attack propagation and piece placement.
//!
//! Placing a piece narrows the rest of the board in two passes. The pass for
//! the placed piece's own attack geometry runs in [`MarkMode::Force`]: every
//! reached square becomes permanently unusable, because any future piece
//! there would be attacked along that geometry. The pass for the *other*
//! piece kind's geometry runs in [`MarkMode::Narrow`]: a square that was
//! still open to both kinds stays legal for the kind that cannot reach the
//! placed piece from it, and only loses the kind that can.

use peaceable_core::{Board, CellState, Position};
use tinyvec::ArrayVec;

/// The eight (Δrow, Δcolumn) knight move offsets.
const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The four diagonal ray directions.
const DIAGONAL_STEPS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// How aggressively attack marking narrows the squares it reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkMode {
    /// Unconditionally forbid every reached square.
    ///
    /// Used for the placed piece's own attack geometry.
    Force,
    /// Only narrow squares that were still unconstrained, and finish off
    /// squares the other geometry had already narrowed.
    ///
    /// Used for the cross-piece geometry.
    Narrow,
}

const fn queen_transition(state: CellState, mode: MarkMode) -> CellState {
    match (mode, state) {
        (MarkMode::Force, _) | (MarkMode::Narrow, CellState::QueenOnly) => CellState::Blocked,
        (MarkMode::Narrow, CellState::Available) => CellState::KnightOnly,
        (MarkMode::Narrow, other) => other,
    }
}

const fn knight_transition(state: CellState, mode: MarkMode) -> CellState {
    match (mode, state) {
        (MarkMode::Force, _) | (MarkMode::Narrow, CellState::KnightOnly) => CellState::Blocked,
        (MarkMode::Narrow, CellState::Available) => CellState::QueenOnly,
        (MarkMode::Narrow, other) => other,
    }
}

/// On-board squares a knight standing at `origin` would attack.
fn knight_targets(board: &Board, origin: Position) -> ArrayVec<[Position; 8]> {
    let mut targets = ArrayVec::new();
    for (row_delta, column_delta) in KNIGHT_OFFSETS {
        if let Some(target) = origin.offset(row_delta, column_delta) {
            if board.get_at(target).is_some() {
                targets.push(target);
            }
        }
    }
    targets
}

/// Marks every square a queen at `origin` attacks: the full row, the full
/// column, and all four diagonal rays out to the board edge.
///
/// `origin` itself lies on its own row and column and is marked along with
/// them; callers that are placing a piece overwrite it afterwards.
pub fn mark_queen_attacks(board: &mut Board, origin: Position, mode: MarkMode) {
    for row in 0..board.rows() {
        let state = board.get(row, origin.column());
        board.set(Position::new(row, origin.column()), queen_transition(state, mode));
    }

    for column in 0..board.columns() {
        let state = board.get(origin.row(), column);
        board.set(Position::new(origin.row(), column), queen_transition(state, mode));
    }

    for (row_step, column_step) in DIAGONAL_STEPS {
        let mut cursor = origin;
        while let Some(next) = cursor.offset(row_step, column_step) {
            let Some(state) = board.get_at(next) else {
                break;
            };
            board.set(next, queen_transition(state, mode));
            cursor = next;
        }
    }
}

/// Marks the up-to-eight squares a knight at `origin` attacks.
pub fn mark_knight_attacks(board: &mut Board, origin: Position, mode: MarkMode) {
    for target in knight_targets(board, origin) {
        let state = board.get(target.row(), target.column());
        board.set(target, knight_transition(state, mode));
    }
}

/// Derives a child board with a queen placed at `pos`.
///
/// The parent board is left untouched. On the child, every square the queen
/// attacks is force-blocked, every square from which a knight could reach
/// her is narrowed out of knight eligibility, and finally `pos` itself is
/// set to [`CellState::Queen`].
///
/// # Examples
///
/// ```
/// use peaceable_core::{Board, CellState, Position};
/// use peaceable_solver::place_queen;
///
/// let board = Board::new(3, 3);
/// let placed = place_queen(&board, Position::new(0, 0));
///
/// assert_eq!(placed.get(0, 0), CellState::Queen);
/// assert_eq!(placed.get(2, 2), CellState::Blocked);
/// // The parent is an unrelated snapshot.
/// assert_eq!(board.get(0, 0), CellState::Available);
/// ```
#[must_use]
pub fn place_queen(board: &Board, pos: Position) -> Board {
    let mut placed = board.clone();
    mark_queen_attacks(&mut placed, pos, MarkMode::Force);
    mark_knight_attacks(&mut placed, pos, MarkMode::Narrow);
    placed.set(pos, CellState::Queen);
    placed
}

/// Derives a child board with a knight placed at `pos`.
///
/// Mirror image of [`place_queen`]: knight-move squares are force-blocked,
/// queen-line squares are narrowed out of queen eligibility, and `pos` is
/// set to [`CellState::Knight`].
#[must_use]
pub fn place_knight(board: &Board, pos: Position) -> Board {
    let mut placed = board.clone();
    mark_knight_attacks(&mut placed, pos, MarkMode::Force);
    mark_queen_attacks(&mut placed, pos, MarkMode::Narrow);
    placed.set(pos, CellState::Knight);
    placed
}
