//! Bit-encoded board state.
//!
//! A [`Board`] marks which cells of a grid are present. The solver treats a
//! set bit as "present and not yet visited" and clears bits as it walks, so a
//! board's population only ever shrinks during a search.
//!
//! # Examples
//!
//! ```
//! use gridpath_core::{Board, Geometry};
//!
//! let geometry = Geometry::new(2, 3)?;
//! let mut board = geometry.full_board();
//! assert_eq!(board.len(), 6);
//!
//! let corner = geometry.encode(0, 0)?;
//! board = board.without(corner);
//! assert!(!board.contains(corner));
//! assert_eq!(board.len(), 5);
//! # Ok::<(), gridpath_core::GridError>(())
//! ```

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::Cell;

/// A set of grid cells stored as a `u128` bitset in row-major order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Board {
    bits: u128,
}

impl Board {
    /// The board with no cells.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates a board from raw bits.
    #[must_use]
    #[inline]
    pub const fn from_bits(bits: u128) -> Self {
        Self { bits }
    }

    /// Returns the raw bits.
    #[must_use]
    #[inline]
    pub const fn bits(self) -> u128 {
        self.bits
    }

    /// Returns the number of present cells.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if no cell is present.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns `true` if `cell` is present.
    #[must_use]
    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        self.bits & cell.bits() != 0
    }

    /// Returns `true` if the two boards share at least one cell.
    #[must_use]
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.bits & other.bits != 0
    }

    /// Adds `cell` to the board.
    #[inline]
    pub fn insert(&mut self, cell: Cell) {
        self.bits |= cell.bits();
    }

    /// Removes `cell` from the board.
    #[inline]
    pub fn remove(&mut self, cell: Cell) {
        self.bits &= !cell.bits();
    }

    /// Returns a copy of the board with `cell` removed.
    #[must_use]
    #[inline]
    pub const fn without(self, cell: Cell) -> Self {
        Self {
            bits: self.bits & !cell.bits(),
        }
    }

    /// Returns the present cell with the lowest index, if any.
    #[must_use]
    #[inline]
    pub fn first(self) -> Option<Cell> {
        (!self.is_empty()).then(|| Cell::from_bits_unchecked(self.bits & self.bits.wrapping_neg()))
    }

    /// Shifts every cell `n` bit positions towards index 0.
    ///
    /// Cells shifted below index 0 are dropped.
    #[must_use]
    #[inline]
    pub const fn shift_down(self, n: usize) -> Self {
        if n >= 128 {
            Self::EMPTY
        } else {
            Self {
                bits: self.bits >> n,
            }
        }
    }

    /// Shifts every cell `n` bit positions towards higher indices.
    ///
    /// Cells shifted past index 127 are dropped. The caller is responsible for
    /// keeping the result within the grid's area.
    #[must_use]
    #[inline]
    pub const fn shift_up(self, n: usize) -> Self {
        if n >= 128 {
            Self::EMPTY
        } else {
            Self {
                bits: self.bits << n,
            }
        }
    }

    /// Iterates over present cells in ascending index order.
    #[must_use]
    #[inline]
    pub const fn iter(self) -> BoardIter {
        BoardIter { bits: self.bits }
    }
}

impl From<Cell> for Board {
    fn from(cell: Cell) -> Self {
        Self { bits: cell.bits() }
    }
}

impl FromIterator<Cell> for Board {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        let mut board = Self::EMPTY;
        for cell in iter {
            board.insert(cell);
        }
        board
    }
}

impl IntoIterator for Board {
    type Item = Cell;
    type IntoIter = BoardIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl BitAnd for Board {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitAndAssign for Board {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl BitOr for Board {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for Board {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:#b})", self.bits)
    }
}

/// Iterator over the cells of a [`Board`], lowest index first.
#[derive(Debug, Clone)]
pub struct BoardIter {
    bits: u128,
}

impl Iterator for BoardIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.bits == 0 {
            return None;
        }
        let lowest = self.bits & self.bits.wrapping_neg();
        self.bits &= self.bits - 1;
        Some(Cell::from_bits_unchecked(lowest))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for BoardIter {}
impl FusedIterator for BoardIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(Board::EMPTY.is_empty());
        assert_eq!(Board::EMPTY.len(), 0);
        assert_eq!(Board::EMPTY.first(), None);
        assert_eq!(Board::EMPTY.iter().count(), 0);
    }

    #[test]
    fn test_insert_remove() {
        let mut board = Board::EMPTY;
        board.insert(Cell::from_index(3));
        board.insert(Cell::from_index(100));
        assert_eq!(board.len(), 2);
        assert!(board.contains(Cell::from_index(100)));

        board.remove(Cell::from_index(3));
        assert!(!board.contains(Cell::from_index(3)));
        assert_eq!(board.first(), Some(Cell::from_index(100)));
    }

    #[test]
    fn test_without_leaves_original() {
        let board = Board::from_bits(0b111);
        let rest = board.without(Cell::from_index(1));
        assert_eq!(rest, Board::from_bits(0b101));
        assert_eq!(board, Board::from_bits(0b111));
    }

    #[test]
    fn test_iter_order() {
        let board: Board = [127, 0, 64, 5].into_iter().map(Cell::from_index).collect();
        let indices: Vec<_> = board.iter().map(Cell::index).collect();
        assert_eq!(indices, vec![0, 5, 64, 127]);
        assert_eq!(board.iter().len(), 4);
    }

    #[test]
    fn test_shifts() {
        let board = Board::from_bits(0b1100);
        assert_eq!(board.shift_down(2), Board::from_bits(0b11));
        assert_eq!(board.shift_up(1), Board::from_bits(0b11000));
        assert_eq!(board.shift_down(128), Board::EMPTY);
        assert_eq!(Board::from_bits(1 << 127).shift_up(1), Board::EMPTY);
    }

    #[test]
    fn test_bit_ops() {
        let a = Board::from_bits(0b0110);
        let b = Board::from_bits(0b0011);
        assert_eq!(a & b, Board::from_bits(0b0010));
        assert_eq!(a | b, Board::from_bits(0b0111));
        assert!(a.intersects(b));
        assert!(!a.intersects(Board::from_bits(0b1000)));
    }
}
