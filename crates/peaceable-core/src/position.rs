//! Board coordinates.

/// A 0-indexed (row, column) board coordinate.
///
/// Positions order row-major: all of row 0 left to right, then row 1, and so
/// on. The derived `Ord` matches that order, which is also the order board
/// scans visit cells in.
///
/// # Examples
///
/// ```
/// use peaceable_core::Position;
///
/// let pos = Position::from_index(5, 3);
/// assert_eq!(pos, Position::new(1, 2));
///
/// // Offsets that would leave the coordinate space are absent, not errors.
/// assert_eq!(Position::new(0, 1).offset(-2, 1), None);
/// assert_eq!(Position::new(2, 0).offset(-1, 2), Some(Position::new(1, 2)));
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
#[display("({row}, {column})")]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Creates a position from a row-major flat index.
    ///
    /// # Panics
    ///
    /// Panics if `columns` is zero.
    #[must_use]
    pub const fn from_index(index: usize, columns: usize) -> Self {
        assert!(columns > 0, "column count must be positive");
        Self {
            row: index / columns,
            column: index % columns,
        }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn column(self) -> usize {
        self.column
    }

    /// Moves the position by a (Δrow, Δcolumn) vector.
    ///
    /// Returns `None` when either coordinate would drop below zero. Targets
    /// beyond the board's far edges still come back `Some`; resolving those
    /// against actual board bounds is [`Board::get_at`]'s job.
    ///
    /// [`Board::get_at`]: crate::Board::get_at
    #[must_use]
    pub fn offset(self, row_delta: isize, column_delta: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(row_delta)?;
        let column = self.column.checked_add_signed(column_delta)?;
        Some(Self { row, column })
    }
}
