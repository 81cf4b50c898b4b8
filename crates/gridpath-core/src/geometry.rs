//! Grid dimensions, coordinate encoding, and adjacency.
//!
//! A [`Geometry`] fixes the height and width of a grid for a run. It converts
//! between zero-based `(row, col)` coordinates and one-hot [`Cell`]s, computes
//! neighbors, and holds the row and column masks used to normalize shapes.
//!
//! # Examples
//!
//! ```
//! use gridpath_core::{Direction, Geometry};
//!
//! let geometry = Geometry::new(3, 4)?;
//! let cell = geometry.encode(1, 2)?;
//! assert_eq!(geometry.decode(cell), (1, 2));
//!
//! // Moving off the grid yields nothing.
//! let corner = geometry.encode(0, 0)?;
//! assert_eq!(geometry.neighbor(corner, Direction::Up), None);
//! assert_eq!(
//!     geometry.neighbor(corner, Direction::Right),
//!     Some(geometry.encode(0, 1)?)
//! );
//! # Ok::<(), gridpath_core::GridError>(())
//! ```

use crate::{Board, Cell, Direction, GridError, MAX_CELLS};

/// Dimensions of a rectangular grid together with its precomputed masks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geometry {
    height: u8,
    width: u8,
    full: Board,
    rows: Box<[Board]>,
    cols: Box<[Board]>,
}

impl Geometry {
    /// Creates the geometry of a `height` x `width` grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either dimension is zero or
    /// the grid has more than [`MAX_CELLS`] cells.
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        if height == 0 || width == 0 || height.saturating_mul(width) > MAX_CELLS {
            return Err(GridError::InvalidDimensions { height, width });
        }
        let (Ok(height_u8), Ok(width_u8)) = (u8::try_from(height), u8::try_from(width)) else {
            return Err(GridError::InvalidDimensions { height, width });
        };

        let one_row = Board::from_bits(u128::MAX >> (MAX_CELLS - width));
        let rows = (0..height)
            .map(|row| one_row.shift_up(row * width))
            .collect::<Box<[_]>>();

        let one_col = (0..height)
            .map(|row| Cell::from_index(row * width))
            .collect::<Board>();
        let cols = (0..width)
            .map(|col| one_col.shift_up(col))
            .collect::<Box<[_]>>();

        let full = rows.iter().fold(Board::EMPTY, |acc, &row| acc | row);

        Ok(Self {
            height: height_u8,
            width: width_u8,
            full,
            rows,
            cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        usize::from(self.height)
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        usize::from(self.width)
    }

    /// Returns the number of cells, `height * width`.
    #[must_use]
    #[inline]
    pub fn area(&self) -> usize {
        self.height() * self.width()
    }

    /// Returns the board with every cell present.
    #[must_use]
    #[inline]
    pub fn full_board(&self) -> Board {
        self.full
    }

    /// Returns the mask of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not below the height.
    #[must_use]
    #[inline]
    pub fn row_mask(&self, row: usize) -> Board {
        self.rows[row]
    }

    /// Returns the mask of column `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not below the width.
    #[must_use]
    #[inline]
    pub fn col_mask(&self, col: usize) -> Board {
        self.cols[col]
    }

    /// Returns all row masks, top to bottom.
    #[must_use]
    pub fn row_masks(&self) -> &[Board] {
        &self.rows
    }

    /// Returns all column masks, left to right.
    #[must_use]
    pub fn col_masks(&self) -> &[Board] {
        &self.cols
    }

    /// Encodes a zero-based coordinate as a cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoordinate`] if the coordinate lies outside
    /// the grid.
    pub fn encode(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        if row >= self.height() || col >= self.width() {
            return Err(GridError::InvalidCoordinate {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(Cell::from_index(row * self.width() + col))
    }

    /// Decodes a cell into its zero-based `(row, col)` coordinate.
    ///
    /// The cell must belong to this geometry; decoding a cell from a larger
    /// grid yields a row past the last one.
    #[must_use]
    #[inline]
    pub fn decode(&self, cell: Cell) -> (usize, usize) {
        let index = cell.index();
        (index / self.width(), index % self.width())
    }

    /// Returns the parity class of a cell, `(row + col) % 2`.
    #[must_use]
    #[inline]
    pub fn parity(&self, cell: Cell) -> usize {
        let (row, col) = self.decode(cell);
        (row + col) % 2
    }

    /// Iterates over every cell of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        (0..self.area()).map(Cell::from_index)
    }

    /// Returns the cell adjacent to `cell` in `direction`, ignoring occupancy.
    ///
    /// Returns `None` when the move would leave the grid.
    #[must_use]
    #[inline]
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let index = cell.index();
        let width = self.width();
        let bits = cell.bits();
        let moved = match direction {
            Direction::Up => (index >= width).then(|| bits >> width),
            Direction::Down => (index < width * (self.height() - 1)).then(|| bits << width),
            Direction::Left => (index % width > 0).then(|| bits >> 1),
            Direction::Right => (index % width < width - 1).then(|| bits << 1),
        };
        moved.map(Cell::from_bits_unchecked)
    }

    /// Moves from `cell` in `direction`, succeeding only if the target cell is
    /// present in `board`.
    ///
    /// This is the single traversal primitive shared by the solver and the
    /// connectivity check.
    #[must_use]
    #[inline]
    pub fn step(&self, board: Board, cell: Cell, direction: Direction) -> Option<Cell> {
        self.neighbor(cell, direction)
            .filter(|&next| board.contains(next))
    }

    /// Returns the direction leading from `from` to the adjacent cell `to`.
    ///
    /// Returns `None` if the cells are not orthogonal neighbors.
    #[must_use]
    pub fn direction_between(&self, from: Cell, to: Cell) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.neighbor(from, direction) == Some(to))
    }
}
