//! Parsing of 1-based `row:col` position lists.
//!
//! Puzzles are described on the command line by the cells removed from a full
//! grid, written as comma-separated `row:col` pairs counted from 1, plus a
//! single `row:col` start position.
//!
//! # Examples
//!
//! ```
//! use gridpath_core::Geometry;
//!
//! let geometry = Geometry::new(2, 2)?;
//! let board = geometry.parse_board("1:1,2:2")?;
//! assert_eq!(board.len(), 2);
//! assert!(board.contains(geometry.parse_cell("1:2")?));
//! assert!(!board.contains(geometry.encode(0, 0)?));
//! # Ok::<(), gridpath_core::GridError>(())
//! ```

use crate::{Board, Cell, Geometry, GridError, ParseError};

impl Geometry {
    /// Parses a 1-based `row:col` token into a cell.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Parse`] if the token is malformed, and
    /// [`GridError::InvalidCoordinate`] if it lies outside the grid.
    pub fn parse_cell(&self, token: &str) -> Result<Cell, GridError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ParseError::EmptyToken.into());
        }
        let components = token.split(':').collect::<Vec<_>>();
        let [row, col] = components[..] else {
            return Err(ParseError::WrongComponentCount {
                token: token.to_owned(),
                count: components.len(),
            }
            .into());
        };
        let row = parse_one_based(row, token)?;
        let col = parse_one_based(col, token)?;
        self.encode(row, col)
    }

    /// Parses a comma-separated list of removed cells into a board.
    ///
    /// The result is the full board with every listed cell removed. A blank
    /// list removes nothing; listing a cell twice is harmless.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by [`Geometry::parse_cell`]; an empty
    /// entry such as the middle of `"1:1,,2:2"` is [`ParseError::EmptyToken`].
    pub fn parse_board(&self, removed: &str) -> Result<Board, GridError> {
        let mut board = self.full_board();
        if removed.trim().is_empty() {
            return Ok(board);
        }
        for token in removed.split(',') {
            board.remove(self.parse_cell(token)?);
        }
        Ok(board)
    }
}

fn parse_one_based(component: &str, token: &str) -> Result<usize, ParseError> {
    let value = component
        .trim()
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidNumber {
            token: token.to_owned(),
        })?;
    value.checked_sub(1).ok_or_else(|| ParseError::ZeroIndex {
        token: token.to_owned(),
    })
}
