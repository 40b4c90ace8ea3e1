//! Per-square placement eligibility.

use std::fmt::{self, Display};

/// The eligibility state of a single board square.
///
/// Squares start [`Available`] and are only ever narrowed: placing a piece
/// marks every square it attacks, and because queens and knights attack along
/// different geometries, a square can end up open to one piece kind but not
/// the other. `Queen` and `Knight` are terminal occupied states; propagation
/// never rewrites them.
///
/// [`Available`]: CellState::Available
///
/// # Examples
///
/// ```
/// use peaceable_core::CellState;
///
/// assert!(CellState::Available.accepts_queen());
/// assert!(CellState::QueenOnly.accepts_queen());
/// assert!(!CellState::QueenOnly.accepts_knight());
/// assert!(!CellState::Blocked.accepts_queen());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum CellState {
    /// Empty and unconstrained; either piece may be placed here.
    Available,
    /// Occupied by a queen.
    Queen,
    /// Occupied by a knight.
    Knight,
    /// Permanently forbidden for any future placement.
    Blocked,
    /// Empty; a queen may still be placed here, a knight may not.
    ///
    /// A square reaches this state when it lies on some knight's attack
    /// geometry but on no queen's geometry so far.
    QueenOnly,
    /// Empty; a knight may still be placed here, a queen may not.
    KnightOnly,
}

impl CellState {
    /// Returns `true` if a queen may be placed on a square in this state.
    #[must_use]
    pub const fn accepts_queen(self) -> bool {
        matches!(self, Self::Available | Self::QueenOnly)
    }

    /// Returns `true` if a knight may be placed on a square in this state.
    #[must_use]
    pub const fn accepts_knight(self) -> bool {
        matches!(self, Self::Available | Self::KnightOnly)
    }

    /// The glyph used for this state in detailed renderings.
    ///
    /// Occupied squares use chess figurines; the narrowed empty states use
    /// lowercase letters so they cannot be mistaken for pieces.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Available => ' ',
            Self::Queen => '♛',
            Self::Knight => '♞',
            Self::Blocked => '*',
            Self::QueenOnly => 'q',
            Self::KnightOnly => 'n',
        }
    }

    /// Parses one ASCII cell character as used by [`Board`]'s text format.
    ///
    /// `Q`/`N` are pieces, `q`/`n` the narrowed empty states, `*` a blocked
    /// square, and `.` or `_` an available one. Returns `None` for anything
    /// else.
    ///
    /// [`Board`]: crate::Board
    ///
    /// # Examples
    ///
    /// ```
    /// use peaceable_core::CellState;
    ///
    /// assert_eq!(CellState::from_char('Q'), Some(CellState::Queen));
    /// assert_eq!(CellState::from_char('.'), Some(CellState::Available));
    /// assert_eq!(CellState::from_char('x'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' | '_' => Some(Self::Available),
            'Q' => Some(Self::Queen),
            'N' => Some(Self::Knight),
            '*' => Some(Self::Blocked),
            'q' => Some(Self::QueenOnly),
            'n' => Some(Self::KnightOnly),
            _ => None,
        }
    }
}

impl Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.glyph(), f)
    }
}
