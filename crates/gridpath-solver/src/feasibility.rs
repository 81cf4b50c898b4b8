//! Necessary conditions for a board to admit a Hamiltonian path.
//!
//! Both checks are cheap compared to the search they prune, and neither is
//! sufficient on its own: a board that passes may still be unsolvable.
//!
//! - **Parity**: color cells by `(row + col) % 2`. Every move changes color,
//!   so a path alternates colors and the two color counts differ by at most 1.
//! - **Connectivity**: a single path can only visit cells of one connected
//!   component.
//!
//! # Examples
//!
//! ```
//! use gridpath_core::Geometry;
//! use gridpath_solver::feasibility::{Infeasibility, check_board, is_board_possible};
//!
//! let geometry = Geometry::new(2, 2)?;
//!
//! // Removing both cells of one diagonal leaves two cells of the same color.
//! let board = geometry.parse_board("1:1,2:2")?;
//! assert!(!is_board_possible(&geometry, board));
//! assert_eq!(
//!     check_board(&geometry, board),
//!     Err(Infeasibility::ParityImbalance { even: 0, odd: 2 })
//! );
//! # Ok::<(), gridpath_core::GridError>(())
//! ```

use std::collections::VecDeque;

use gridpath_core::{Board, Direction, Geometry};

/// The reason a board cannot admit a Hamiltonian path.
///
/// This is a diagnostic value, not an error: an infeasible board is a normal
/// outcome that callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Infeasibility {
    /// The board has no cells.
    #[display("the board is empty")]
    Empty,
    /// The two parity classes differ in size by more than one.
    #[display("parity imbalance: {even} even cells vs {odd} odd cells")]
    ParityImbalance {
        /// Number of cells with even `row + col`.
        even: usize,
        /// Number of cells with odd `row + col`.
        odd: usize,
    },
    /// Not every cell is reachable from the others.
    #[display("the board is disconnected: {reached} of {total} cells reachable")]
    Disconnected {
        /// Size of the component containing the lowest-index cell.
        reached: usize,
        /// Number of cells on the board.
        total: usize,
    },
}

/// Counts the board's cells by parity class, returning `(even, odd)`.
#[must_use]
pub fn parity_counts(geometry: &Geometry, board: Board) -> (usize, usize) {
    board.iter().fold((0, 0), |(even, odd), cell| {
        if geometry.parity(cell) == 0 {
            (even + 1, odd)
        } else {
            (even, odd + 1)
        }
    })
}

/// Returns the component of `board` containing its lowest-index cell.
///
/// The traversal is breadth-first and only follows [`Geometry::step`] moves, so
/// it never leaves the board. An empty board yields an empty component.
#[must_use]
pub fn reachable_from_first(geometry: &Geometry, board: Board) -> Board {
    let Some(seed) = board.first() else {
        return Board::EMPTY;
    };

    let mut visited = Board::from(seed);
    let mut queue = VecDeque::from([seed]);
    while let Some(cell) = queue.pop_front() {
        for direction in Direction::ALL {
            if let Some(next) = geometry.step(board, cell, direction)
                && !visited.contains(next)
            {
                visited.insert(next);
                queue.push_back(next);
            }
        }
    }
    visited
}

/// Returns `true` if every cell of the board lies in a single component.
///
/// The empty board is considered connected; [`check_board`] rejects it
/// separately.
#[must_use]
pub fn is_connected(geometry: &Geometry, board: Board) -> bool {
    reachable_from_first(geometry, board) == board
}

/// Runs both feasibility checks and reports the first that fails.
///
/// # Errors
///
/// Returns the [`Infeasibility`] describing why no Hamiltonian path can
/// exist. Parity is checked before connectivity.
pub fn check_board(geometry: &Geometry, board: Board) -> Result<(), Infeasibility> {
    if board.is_empty() {
        return Err(Infeasibility::Empty);
    }

    let (even, odd) = parity_counts(geometry, board);
    if even.abs_diff(odd) > 1 {
        return Err(Infeasibility::ParityImbalance { even, odd });
    }

    let reached = reachable_from_first(geometry, board);
    if reached != board {
        return Err(Infeasibility::Disconnected {
            reached: reached.len(),
            total: board.len(),
        });
    }

    Ok(())
}

/// Returns `true` unless the board is empty, parity-imbalanced, or
/// disconnected.
#[must_use]
#[inline]
pub fn is_board_possible(geometry: &Geometry, board: Board) -> bool {
    check_board(geometry, board).is_ok()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty_board_is_impossible() {
        let geometry = Geometry::new(3, 3).unwrap();
        assert_eq!(
            check_board(&geometry, Board::EMPTY),
            Err(Infeasibility::Empty)
        );
        assert!(is_connected(&geometry, Board::EMPTY));
    }

    #[test]
    fn test_single_cell_is_possible() {
        let geometry = Geometry::new(3, 3).unwrap();
        let board = Board::from(geometry.encode(2, 1).unwrap());
        assert!(is_board_possible(&geometry, board));
    }

    #[test]
    fn test_full_boards_are_possible() {
        for (height, width) in [(1, 1), (1, 5), (2, 2), (3, 3), (4, 5), (8, 16)] {
            let geometry = Geometry::new(height, width).unwrap();
            assert!(
                is_board_possible(&geometry, geometry.full_board()),
                "{height}x{width}"
            );
        }
    }

    #[test]
    fn test_parity_counts() {
        let geometry = Geometry::new(3, 3).unwrap();
        assert_eq!(parity_counts(&geometry, geometry.full_board()), (5, 4));
        let board = geometry.parse_board("2:2").unwrap();
        assert_eq!(parity_counts(&geometry, board), (4, 4));
    }

    #[test]
    fn test_parity_imbalance() {
        let geometry = Geometry::new(3, 3).unwrap();
        // Removing two edge cells leaves 5 even cells and 2 odd cells.
        let board = geometry.parse_board("1:2,2:1").unwrap();
        assert_eq!(
            check_board(&geometry, board),
            Err(Infeasibility::ParityImbalance { even: 5, odd: 2 })
        );
    }

    #[test]
    fn test_disconnected() {
        let geometry = Geometry::new(2, 4).unwrap();
        // Removing column 2 leaves a 2x1 strip and a 2x2 block.
        let board = geometry.parse_board("1:2,2:2").unwrap();
        assert_eq!(
            check_board(&geometry, board),
            Err(Infeasibility::Disconnected {
                reached: 2,
                total: 6,
            })
        );
        assert!(!is_connected(&geometry, board));
    }

    #[test]
    fn test_reachable_does_not_wrap_rows() {
        let geometry = Geometry::new(2, 3).unwrap();
        // (0, 2) and (1, 0) are consecutive bits but not neighbors.
        let board = Board::from(geometry.encode(0, 2).unwrap())
            | Board::from(geometry.encode(1, 0).unwrap());
        assert_eq!(reachable_from_first(&geometry, board).len(), 1);
    }

    proptest! {
        #[test]
        fn prop_parity_imbalance_is_impossible(bits in any::<u16>()) {
            let geometry = Geometry::new(4, 4).unwrap();
            let board = Board::from_bits(u128::from(bits));
            let (even, odd) = parity_counts(&geometry, board);
            if board.is_empty() || even.abs_diff(odd) > 1 {
                prop_assert!(!is_board_possible(&geometry, board));
            }
        }

        #[test]
        fn prop_reachable_is_subset(bits in any::<u16>()) {
            let geometry = Geometry::new(4, 4).unwrap();
            let board = Board::from_bits(u128::from(bits));
            let reached = reachable_from_first(&geometry, board);
            prop_assert_eq!(reached & board, reached);
            prop_assert_eq!(reached.is_empty(), board.is_empty());
        }
    }
}
