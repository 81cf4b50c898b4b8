//! Translation-invariant shape keys.
//!
//! Two boards whose shapes differ only by a shift share their solutions, so
//! bulk generation keeps one representative per shape: the one pushed into the
//! top-left corner.
//!
//! # Examples
//!
//! ```
//! use gridpath_core::{Board, Geometry};
//! use gridpath_generator::canonical::{canonicalize, is_canonical};
//!
//! let geometry = Geometry::new(2, 2)?;
//! let top_left = Board::from(geometry.encode(0, 0)?);
//! let bottom_right = Board::from(geometry.encode(1, 1)?);
//!
//! assert_eq!(canonicalize(&geometry, bottom_right), canonicalize(&geometry, top_left));
//! assert!(is_canonical(&geometry, top_left));
//! assert!(!is_canonical(&geometry, bottom_right));
//! # Ok::<(), gridpath_core::GridError>(())
//! ```

use gridpath_core::{Board, Geometry};

/// A board shifted so that its first non-empty row and column are both 0.
///
/// Boards related by a pure translation have equal keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalKey(Board);

impl CanonicalKey {
    /// Returns the normalized board.
    #[must_use]
    pub fn board(self) -> Board {
        self.0
    }
}

/// Normalizes `board` by shifting out its leading empty rows and columns.
///
/// The empty board is its own key.
#[must_use]
pub fn canonicalize(geometry: &Geometry, board: Board) -> CanonicalKey {
    if board.is_empty() {
        return CanonicalKey(board);
    }
    let first_row = leading_empty(geometry.row_masks(), board);
    let first_col = leading_empty(geometry.col_masks(), board);
    CanonicalKey(board.shift_down(first_row * geometry.width() + first_col))
}

/// Returns `true` if `board` already is its own canonical key.
#[must_use]
pub fn is_canonical(geometry: &Geometry, board: Board) -> bool {
    canonicalize(geometry, board).board() == board
}

fn leading_empty(masks: &[Board], board: Board) -> usize {
    masks
        .iter()
        .position(|mask| mask.intersects(board))
        .unwrap_or(masks.len())
}
