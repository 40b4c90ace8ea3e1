//! Depth-first backtracking search.

use peaceable_core::{Board, CellState};

use crate::placement::{place_knight, place_queen};

/// Counters describing the work a search performed.
///
/// # Examples
///
/// ```
/// use peaceable_core::Board;
/// use peaceable_solver::solve_with_stats;
///
/// let (solution, stats) = solve_with_stats(Board::new(4, 4), 2, 0);
/// assert!(solution.is_some());
/// assert!(stats.nodes > 0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Search nodes visited, counting the root.
    pub nodes: usize,
    /// Tentative placements tried; each one clones a board.
    pub placements: usize,
}

/// Searches for a board holding `queens` queens and `knights` knights with no
/// piece attacking any other.
///
/// All queens are placed before any knight. At every level the candidate
/// squares are visited in ascending row-major order and the first solution
/// found depth-first under that order is returned, so identical inputs always
/// produce the identical solution. `None` means the search space is
/// exhausted; exhaustion is a normal negative result, not an error.
///
/// # Examples
///
/// ```
/// use peaceable_core::Board;
/// use peaceable_solver::solve;
///
/// assert!(solve(Board::new(4, 4), 2, 0).is_some());
/// assert!(solve(Board::new(1, 1), 2, 0).is_none());
/// ```
#[must_use]
pub fn solve(board: Board, queens: usize, knights: usize) -> Option<Board> {
    solve_with_stats(board, queens, knights).0
}

/// Like [`solve`], additionally returning [`SearchStats`] for the run.
#[must_use]
pub fn solve_with_stats(
    board: Board,
    queens: usize,
    knights: usize,
) -> (Option<Board>, SearchStats) {
    let mut stats = SearchStats::default();
    let solution = search(board, queens, knights, &mut stats);
    match &solution {
        Some(_) => log::debug!(
            "solution found after {} nodes and {} placements",
            stats.nodes,
            stats.placements
        ),
        None => log::debug!(
            "search exhausted after {} nodes and {} placements",
            stats.nodes,
            stats.placements
        ),
    }
    (solution, stats)
}

fn search(board: Board, queens: usize, knights: usize, stats: &mut SearchStats) -> Option<Board> {
    stats.nodes += 1;
    log::trace!(
        "queens left: {queens}, knights left: {knights}\n{}",
        board.render(true)
    );

    if queens == 0 && knights == 0 {
        return Some(board);
    }

    if queens > 0 {
        board
            .positions_where(CellState::accepts_queen)
            .find_map(|pos| {
                stats.placements += 1;
                search(place_queen(&board, pos), queens - 1, knights, stats)
            })
    } else {
        board
            .positions_where(CellState::accepts_knight)
            .find_map(|pos| {
                stats.placements += 1;
                search(place_knight(&board, pos), queens, knights - 1, stats)
            })
    }
}
