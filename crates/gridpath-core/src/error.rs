//! Error types for grid construction, coordinates, and position-list parsing.

use crate::MAX_CELLS;

/// Errors raised while building geometries, cells, or boards.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GridError {
    /// The grid has a zero dimension or more cells than a board can hold.
    #[display("invalid grid dimensions {height}x{width} (at most {} cells supported)", MAX_CELLS)]
    InvalidDimensions {
        /// Requested number of rows.
        height: usize,
        /// Requested number of columns.
        width: usize,
    },
    /// A zero-based coordinate lies outside the grid.
    #[display("coordinate ({row}, {col}) is outside a {height}x{width} grid")]
    InvalidCoordinate {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
        /// Grid height.
        height: u8,
        /// Grid width.
        width: u8,
    },
    /// A value used as a cell is zero or has more than one bit set.
    #[display("{bits:#x} is not a single-cell position")]
    InvalidPosition {
        /// The offending bits.
        bits: u128,
    },
    /// A textual position list could not be parsed.
    #[display("parse error: {_0}")]
    Parse(#[from] ParseError),
}

/// Errors raised while parsing 1-based `row:col` position tokens.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// A comma-separated list contained an empty entry.
    #[display("empty position in list")]
    EmptyToken,
    /// The token does not split into exactly two `:`-separated components.
    #[display("expected `row:col`, got {token:?} ({count} components)")]
    WrongComponentCount {
        /// The offending token.
        token: String,
        /// Number of components found.
        count: usize,
    },
    /// A component is not a non-negative integer.
    #[display("invalid number in position {token:?}")]
    InvalidNumber {
        /// The offending token.
        token: String,
    },
    /// A component is zero; positions are 1-based.
    #[display("positions are 1-based, got {token:?}")]
    ZeroIndex {
        /// The offending token.
        token: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Geometry;

    #[test]
    fn test_invalid_dimensions_message_names_limit() {
        let err = Geometry::new(12, 11).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("invalid grid dimensions 12x11 (at most {MAX_CELLS} cells supported)")
        );
    }

    #[test]
    fn test_parse_error_converts() {
        let err = GridError::from(ParseError::EmptyToken);
        assert_eq!(err, GridError::Parse(ParseError::EmptyToken));
        assert_eq!(err.to_string(), "parse error: empty position in list");
    }
}
