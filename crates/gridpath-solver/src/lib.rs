//! Hamiltonian-path solver for connect-a-graph puzzles.
//!
//! [`BacktrackSolver`] extends a path one cell at a time, pruning every state
//! whose remaining cells fail the checks in [`feasibility`]. A solved
//! [`Path`] can be checked against its board with [`Path::validate`].
//!
//! # Examples
//!
//! ```
//! use gridpath_core::Geometry;
//! use gridpath_solver::BacktrackSolver;
//!
//! let geometry = Geometry::new(2, 2)?;
//! let solver = BacktrackSolver::new(&geometry);
//! let board = geometry.full_board();
//!
//! let path = solver.solve(board, geometry.parse_cell("1:1")?);
//! assert_eq!(path.len(), 4);
//! assert!(path.validate(&geometry, board).is_ok());
//! # Ok::<(), gridpath_core::GridError>(())
//! ```

pub use self::{
    error::PathError,
    path::Path,
    solver::{BacktrackSolver, SolveOutcome, SolverStats},
};

mod error;
pub mod feasibility;
mod path;
mod solver;
