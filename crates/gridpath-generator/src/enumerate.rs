//! Exhaustive enumeration of boards with a fixed number of cells.

use std::iter::FusedIterator;

use gridpath_core::{Board, Cell, Geometry};

/// Returns every board of `geometry` with exactly `count` cells present.
///
/// Boards are yielded in lexicographic order of their sorted cell indices, so
/// the first board holds cells `0..count`. The sequence is lazy and finite;
/// calling this again restarts it from the beginning. If `count` exceeds the
/// grid's area, nothing is yielded; if it is zero, the empty board is yielded
/// once.
///
/// # Examples
///
/// ```
/// use gridpath_core::Geometry;
/// use gridpath_generator::enumerate::{all_boards_with_cell_count, binomial};
///
/// let geometry = Geometry::new(2, 3)?;
/// let boards: Vec<_> = all_boards_with_cell_count(&geometry, 2).collect();
/// assert_eq!(boards.len() as u128, binomial(6, 2).unwrap());
/// assert!(boards.iter().all(|board| board.len() == 2));
/// # Ok::<(), gridpath_core::GridError>(())
/// ```
#[must_use]
pub fn all_boards_with_cell_count(geometry: &Geometry, count: usize) -> BoardsWithCellCount {
    let area = geometry.area();
    BoardsWithCellCount {
        area,
        indices: (count <= area).then(|| (0..count).collect()),
    }
}

/// Iterator returned by [`all_boards_with_cell_count`].
#[derive(Debug, Clone)]
pub struct BoardsWithCellCount {
    area: usize,
    // `None` once exhausted.
    indices: Option<Vec<usize>>,
}

impl BoardsWithCellCount {
    fn advance(&mut self) {
        let Some(indices) = &mut self.indices else {
            return;
        };
        let count = indices.len();
        // Rightmost index that can still move right.
        let Some(i) = (0..count).rev().find(|&i| indices[i] < self.area - count + i) else {
            self.indices = None;
            return;
        };
        indices[i] += 1;
        for j in i + 1..count {
            indices[j] = indices[j - 1] + 1;
        }
    }
}

impl Iterator for BoardsWithCellCount {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        let board = self
            .indices
            .as_ref()?
            .iter()
            .map(|&index| Cell::from_index(index))
            .collect();
        self.advance();
        Some(board)
    }
}

impl FusedIterator for BoardsWithCellCount {}

/// Returns the binomial coefficient `C(n, k)`, or `None` on overflow.
///
/// This is the number of boards [`all_boards_with_cell_count`] yields for a
/// grid of `n` cells.
#[must_use]
pub fn binomial(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result = 1u128;
    for i in 0..k {
        // C(n, i + 1) = C(n, i) * (n - i) / (i + 1). Dividing out the common
        // factor first keeps every intermediate value below the result.
        let divisor = i as u128 + 1;
        let g = gcd(result, divisor);
        let factor = (n - i) as u128 / (divisor / g);
        result = (result / g).checked_mul(factor)?;
    }
    Some(result)
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(4, 0), Some(1));
        assert_eq!(binomial(4, 2), Some(6));
        assert_eq!(binomial(9, 4), Some(126));
        assert_eq!(binomial(3, 5), Some(0));
        assert_eq!(binomial(52, 5), Some(2_598_960));
        assert_eq!(
            binomial(120, 60),
            Some(96_614_908_840_363_322_603_893_139_521_372_656)
        );
        assert_eq!(
            binomial(128, 60),
            Some(18_686_473_065_609_137_667_262_738_408_744_720_800)
        );
        assert_eq!(
            binomial(128, 64),
            Some(23_951_146_041_928_082_866_135_587_776_380_551_750)
        );
    }

    #[test]
    fn test_binomial_overflow() {
        // C(200, 100) is about 9.05e58.
        assert_eq!(binomial(200, 100), None);
        assert_eq!(binomial(200, 1), Some(200));
    }

    #[test]
    fn test_binomial_matches_pascal() {
        let mut row = vec![1u128];
        for n in 1..=128 {
            let mut next = vec![1u128; n + 1];
            for k in 1..n {
                next[k] = row[k - 1] + row[k];
            }
            row = next;
            for (k, &expected) in row.iter().enumerate() {
                assert_eq!(binomial(n, k), Some(expected), "C({n}, {k})");
            }
        }
    }

    #[test]
    fn test_lexicographic_order() {
        let geometry = Geometry::new(1, 4).unwrap();
        let bits = all_boards_with_cell_count(&geometry, 2)
            .map(Board::bits)
            .collect::<Vec<_>>();
        assert_eq!(
            bits,
            vec![0b0011, 0b0101, 0b1001, 0b0110, 0b1010, 0b1100]
        );
    }

    #[test]
    fn test_edge_counts() {
        let geometry = Geometry::new(2, 2).unwrap();
        assert_eq!(
            all_boards_with_cell_count(&geometry, 0).collect::<Vec<_>>(),
            vec![Board::EMPTY]
        );
        assert_eq!(
            all_boards_with_cell_count(&geometry, 4).collect::<Vec<_>>(),
            vec![geometry.full_board()]
        );
        assert_eq!(all_boards_with_cell_count(&geometry, 5).count(), 0);
    }

    #[test]
    fn test_restart_yields_same_sequence() {
        let geometry = Geometry::new(2, 3).unwrap();
        let first = all_boards_with_cell_count(&geometry, 3).collect::<Vec<_>>();
        let second = all_boards_with_cell_count(&geometry, 3).collect::<Vec<_>>();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fused() {
        let geometry = Geometry::new(1, 2).unwrap();
        let mut boards = all_boards_with_cell_count(&geometry, 2);
        assert!(boards.next().is_some());
        assert!(boards.next().is_none());
        assert!(boards.next().is_none());
    }

    fn dims_and_count() -> impl Strategy<Value = (usize, usize, usize)> {
        (1..=3usize, 1..=4usize).prop_flat_map(|(height, width)| {
            (Just(height), Just(width), 0..=height * width)
        })
    }

    proptest! {
        #[test]
        fn prop_count_matches_binomial((height, width, count) in dims_and_count()) {
            let geometry = Geometry::new(height, width).unwrap();
            let boards = all_boards_with_cell_count(&geometry, count).collect::<Vec<_>>();
            prop_assert_eq!(boards.len() as u128, binomial(height * width, count).unwrap());
            prop_assert!(boards.iter().all(|board| board.len() == count));
            prop_assert!(boards.windows(2).all(|pair| pair[0] != pair[1]));
        }
    }
}
