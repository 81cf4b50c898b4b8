//! One-hot cell positions.

use crate::{GridError, MAX_CELLS};

/// A single grid cell, encoded as a one-hot bitset.
///
/// Exactly one bit is set at all times. The bit index is `row * width + col`
/// for the [`Geometry`](crate::Geometry) the cell belongs to; a `Cell` does not
/// remember its geometry, so decoding it back to `(row, col)` goes through
/// [`Geometry::decode`](crate::Geometry::decode).
///
/// # Examples
///
/// ```
/// use gridpath_core::Cell;
///
/// let cell = Cell::from_index(5);
/// assert_eq!(cell.index(), 5);
/// assert_eq!(cell.bits(), 1 << 5);
///
/// assert!(Cell::try_from_bits(0b11).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    bits: u128,
}

impl Cell {
    /// Creates the cell whose bit index is `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`MAX_CELLS`].
    #[must_use]
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < MAX_CELLS, "cell index out of range");
        Self { bits: 1 << index }
    }

    /// Creates a cell from raw bits, checking that exactly one bit is set.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPosition`] if `bits` is zero or has more than
    /// one bit set.
    #[inline]
    pub fn try_from_bits(bits: u128) -> Result<Self, GridError> {
        if bits.count_ones() == 1 {
            Ok(Self { bits })
        } else {
            Err(GridError::InvalidPosition { bits })
        }
    }

    /// Wraps bits that are one-hot by construction.
    #[inline]
    pub(crate) const fn from_bits_unchecked(bits: u128) -> Self {
        debug_assert!(bits.count_ones() == 1);
        Self { bits }
    }

    /// Returns the raw one-hot bits.
    #[must_use]
    #[inline]
    pub const fn bits(self) -> u128 {
        self.bits
    }

    /// Returns the index of the set bit.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.bits.trailing_zeros() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for index in [0, 1, 63, 64, 127] {
            assert_eq!(Cell::from_index(index).index(), index);
        }
    }

    #[test]
    fn test_try_from_bits() {
        assert_eq!(Cell::try_from_bits(1 << 9), Ok(Cell::from_index(9)));
        assert_eq!(
            Cell::try_from_bits(0),
            Err(GridError::InvalidPosition { bits: 0 })
        );
        assert_eq!(
            Cell::try_from_bits(0b101),
            Err(GridError::InvalidPosition { bits: 0b101 })
        );
    }

    #[test]
    #[should_panic(expected = "cell index out of range")]
    fn test_rejects_large_index() {
        let _ = Cell::from_index(MAX_CELLS);
    }
}
