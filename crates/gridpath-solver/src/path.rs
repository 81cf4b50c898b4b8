//! Solved paths.

use std::ops::Deref;

use gridpath_core::{Board, Cell, Direction, Geometry};

use crate::PathError;

/// An ordered walk over grid cells, as produced by the solver.
///
/// An empty path means the solver found no solution. A non-empty path
/// returned by the solver starts at the requested cell and visits every cell of
/// the board exactly once.
///
/// `Path` dereferences to `[Cell]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Creates an empty path with room for `capacity` cells.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    pub(crate) fn pop(&mut self) -> Option<Cell> {
        self.cells.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.cells.clear();
    }

    /// Returns the cells in visiting order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Consumes the path and returns its cells.
    #[must_use]
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    /// Returns the first cell, if any.
    #[must_use]
    pub fn start(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    /// Returns the last cell, if any.
    #[must_use]
    pub fn end(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Returns the set of visited cells.
    #[must_use]
    pub fn visited(&self) -> Board {
        self.cells.iter().copied().collect()
    }

    /// Iterates over the moves between consecutive cells.
    ///
    /// Yields `None` for a pair of cells that are not neighbors, which cannot
    /// happen for paths returned by the solver.
    pub fn directions<'a>(
        &'a self,
        geometry: &'a Geometry,
    ) -> impl Iterator<Item = Option<Direction>> + 'a {
        self.cells
            .windows(2)
            .map(|pair| geometry.direction_between(pair[0], pair[1]))
    }

    /// Checks that this is a Hamiltonian path of `board`.
    ///
    /// The path must be non-empty, stay on the board, visit no cell twice,
    /// move only between orthogonal neighbors, and cover every cell.
    ///
    /// # Errors
    ///
    /// Returns the first violated condition as a [`PathError`].
    pub fn validate(&self, geometry: &Geometry, board: Board) -> Result<(), PathError> {
        if self.cells.is_empty() {
            return Err(PathError::Empty);
        }

        let mut visited = Board::EMPTY;
        for (index, &cell) in self.cells.iter().enumerate() {
            if !board.contains(cell) {
                return Err(PathError::NotOnBoard { index, cell });
            }
            if visited.contains(cell) {
                return Err(PathError::Revisited { index, cell });
            }
            visited.insert(cell);
        }

        if let Some(index) = self
            .directions(geometry)
            .position(|direction| direction.is_none())
        {
            return Err(PathError::NotAdjacent { index });
        }

        let missing = board.len() - visited.len();
        if missing > 0 {
            return Err(PathError::Incomplete { missing });
        }
        Ok(())
    }
}

impl Deref for Path {
    type Target = [Cell];

    fn deref(&self) -> &[Cell] {
        &self.cells
    }
}

impl From<Vec<Cell>> for Path {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

impl FromIterator<Cell> for Path {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
