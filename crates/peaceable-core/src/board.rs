//! The board grid.
//!
//! A [`Board`] is one snapshot of the whole puzzle state: a row-major array
//! of [`CellState`] values plus its dimensions. Boards have value semantics.
//! The solver clones a parent board for every tentative placement and each
//! recursion level owns its copy exclusively, so a board handed to a deeper
//! call is never mutated behind the caller's back.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{cell::CellState, position::Position};

/// A rectangular grid of per-square eligibility states.
///
/// # Examples
///
/// ```
/// use peaceable_core::{Board, CellState, Position};
///
/// let mut board = Board::new(2, 3);
/// assert_eq!(board.rows(), 2);
/// assert_eq!(board.columns(), 3);
///
/// board.set(Position::new(1, 2), CellState::Knight);
///
/// // Clones are independent snapshots.
/// let copy = board.clone();
/// board.set(Position::new(0, 0), CellState::Blocked);
/// assert_eq!(copy.get(0, 0), CellState::Available);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Creates a board with every square [`CellState::Available`].
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `columns` is zero.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(
            rows > 0 && columns > 0,
            "board dimensions must be positive, got {rows}x{columns}"
        );
        Self {
            rows,
            columns,
            cells: vec![CellState::Available; rows * columns],
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the state at a coordinate known to be on the board.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is out of bounds. Use [`get_at`] for
    /// coordinates that may fall outside the board.
    ///
    /// [`get_at`]: Board::get_at
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> CellState {
        self.cells[self.index_of(row, column)]
    }

    /// Returns the state at `pos`, or `None` if `pos` is off the board.
    ///
    /// Knight-attack targets are produced by offsetting a position and may
    /// land outside the grid; this is the lookup that treats those as a
    /// defined "absent" result.
    #[must_use]
    pub fn get_at(&self, pos: Position) -> Option<CellState> {
        (pos.row() < self.rows && pos.column() < self.columns)
            .then(|| self.get(pos.row(), pos.column()))
    }

    /// Overwrites the state at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    pub fn set(&mut self, pos: Position, state: CellState) {
        let index = self.index_of(pos.row(), pos.column());
        self.cells[index] = state;
    }

    /// Iterates the positions whose state satisfies `predicate`, in
    /// ascending flat-index (row-major) order.
    ///
    /// The iterator is lazy and borrows the board; it can be re-created at
    /// will and always yields the same sequence for an unchanged board.
    ///
    /// # Examples
    ///
    /// ```
    /// use peaceable_core::{Board, CellState, Position};
    ///
    /// let mut board = Board::new(2, 2);
    /// board.set(Position::new(0, 1), CellState::Queen);
    /// board.set(Position::new(1, 0), CellState::Queen);
    ///
    /// let queens: Vec<Position> = board.positions_where(|state| state.is_queen()).collect();
    /// assert_eq!(queens, vec![Position::new(0, 1), Position::new(1, 0)]);
    /// ```
    pub fn positions_where<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = Position> + 'a
    where
        P: Fn(CellState) -> bool + 'a,
    {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, state)| predicate(*state))
            .map(move |(index, _)| Position::from_index(index, columns))
    }

    /// Renders the board as a bordered character grid.
    ///
    /// With `detailed` false only piece glyphs are drawn and every empty or
    /// narrowed square renders blank, which is the presentation format for
    /// solutions. With `detailed` true each state draws its own glyph, the
    /// form the solver logs while tracing the search.
    ///
    /// # Examples
    ///
    /// ```
    /// use peaceable_core::{Board, CellState, Position};
    ///
    /// let mut board = Board::new(2, 2);
    /// board.set(Position::new(0, 0), CellState::Queen);
    /// board.set(Position::new(1, 1), CellState::Blocked);
    ///
    /// assert_eq!(board.render(false), "+-+-+\n|♛| |\n+-+-+\n| | |\n+-+-+\n");
    /// assert_eq!(board.render(true), "+-+-+\n|♛| |\n+-+-+\n| |*|\n+-+-+\n");
    /// ```
    #[must_use]
    pub fn render(&self, detailed: bool) -> String {
        let divider = format!("{}+\n", "+-".repeat(self.columns));
        let mut out = String::with_capacity((self.rows * 2 + 1) * (self.columns * 2 + 2));

        out.push_str(&divider);
        for row in 0..self.rows {
            for column in 0..self.columns {
                let state = self.get(row, column);
                let glyph = if detailed || state.is_queen() || state.is_knight() {
                    state.glyph()
                } else {
                    ' '
                };
                out.push('|');
                out.push(glyph);
            }
            out.push_str("|\n");
            out.push_str(&divider);
        }
        out
    }

    fn index_of(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.rows && column < self.columns,
            "position ({row}, {column}) is outside a {}x{} board",
            self.rows,
            self.columns
        );
        row * self.columns + column
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

/// Error returned when parsing a [`Board`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The input contained no non-empty rows.
    #[display("board text contains no rows")]
    Empty,
    /// A row's cell count did not match the first row's.
    #[display("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Column count established by the first row.
        expected: usize,
        /// Column count actually found.
        found: usize,
    },
    /// A character that does not name a cell state.
    #[display("unrecognized cell character {character:?}")]
    UnknownCell {
        /// The offending character.
        character: char,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses an ASCII grid, one board row per non-empty line.
    ///
    /// Cell characters follow [`CellState::from_char`]; whitespace inside a
    /// line is ignored, so cells may be grouped for readability.
    ///
    /// # Examples
    ///
    /// ```
    /// use peaceable_core::{Board, CellState};
    ///
    /// let board: Board = "
    ///     Q..
    ///     ..n
    ///     .N*
    /// "
    /// .parse()?;
    ///
    /// assert_eq!(board.get(0, 0), CellState::Queen);
    /// assert_eq!(board.get(1, 2), CellState::KnightOnly);
    /// assert_eq!(board.get(2, 1), CellState::Knight);
    /// assert_eq!(board.get(2, 2), CellState::Blocked);
    /// # Ok::<(), peaceable_core::ParseBoardError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut columns = None;

        for line in s.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let mut width = 0;
            for character in line.chars().filter(|ch| !ch.is_whitespace()) {
                let state = CellState::from_char(character)
                    .ok_or(ParseBoardError::UnknownCell { character })?;
                cells.push(state);
                width += 1;
            }
            match columns {
                None => columns = Some(width),
                Some(expected) if expected != width => {
                    return Err(ParseBoardError::RaggedRow {
                        row: rows,
                        expected,
                        found: width,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let columns = columns.ok_or(ParseBoardError::Empty)?;
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }
}
