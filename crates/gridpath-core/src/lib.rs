//! Core data structures for connect-a-graph puzzles.
//!
//! A puzzle is a rectangular grid with some cells removed; solving it means
//! finding a path that visits every remaining cell exactly once using
//! orthogonal moves. This crate provides the bit-level representation shared
//! by the solver and the generator.
//!
//! # Overview
//!
//! - [`Geometry`]: grid dimensions, `(row, col)` encoding, neighbors, and the
//!   row/column masks.
//! - [`Board`]: the set of present cells, one bit per cell in row-major order.
//! - [`Cell`]: a single cell as a one-hot bitset.
//! - [`Direction`]: the four orthogonal moves, in exploration order.
//!
//! Boards are stored in a `u128`, so a grid holds at most [`MAX_CELLS`] cells.
//!
//! # Examples
//!
//! ```
//! use gridpath_core::{Direction, Geometry};
//!
//! let geometry = Geometry::new(2, 2)?;
//! let board = geometry.parse_board("2:2")?;
//! let start = geometry.parse_cell("1:1")?;
//!
//! // Cell 2:2 was removed, so moving down then right is blocked.
//! let below = geometry.step(board, start, Direction::Down).unwrap();
//! assert_eq!(geometry.step(board, below, Direction::Right), None);
//! # Ok::<(), gridpath_core::GridError>(())
//! ```

pub use self::{
    board::{Board, BoardIter},
    cell::Cell,
    direction::Direction,
    error::{GridError, ParseError},
    geometry::Geometry,
};

pub mod board;
mod cell;
mod direction;
mod error;
pub mod geometry;
pub mod parse;

/// Maximum number of cells a grid may have.
pub const MAX_CELLS: usize = 128;
