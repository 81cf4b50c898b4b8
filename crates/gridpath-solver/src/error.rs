use gridpath_core::Cell;

/// Ways a path can fail to be a Hamiltonian path of a board.
///
/// Returned by [`Path::validate`](crate::Path::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PathError {
    /// The path has no cells.
    #[display("the path is empty")]
    Empty,
    /// A cell of the path is not present on the board.
    #[display("step {index} visits {cell:?}, which is not on the board")]
    NotOnBoard {
        /// Position in the path.
        index: usize,
        /// The offending cell.
        cell: Cell,
    },
    /// A cell is visited more than once.
    #[display("step {index} revisits {cell:?}")]
    Revisited {
        /// Position of the second visit.
        index: usize,
        /// The repeated cell.
        cell: Cell,
    },
    /// Two consecutive cells are not orthogonal neighbors.
    #[display("step {index} is not adjacent to the step after it")]
    NotAdjacent {
        /// Position of the first cell of the pair.
        index: usize,
    },
    /// The path ends before every cell of the board was visited.
    #[display("{missing} cells of the board are never visited")]
    Incomplete {
        /// Number of unvisited cells.
        missing: usize,
    },
}
