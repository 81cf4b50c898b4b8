//! Exhaustive board generation for connect-a-graph puzzles.
//!
//! The pipeline has three stages:
//!
//! 1. [`enumerate`] lists every board with a given number of present cells.
//! 2. [`canonical`] drops boards that are translations of an earlier shape.
//! 3. [`CatalogGenerator`] filters out infeasible shapes and solves the rest
//!    from every start cell, spreading shapes across threads and reporting
//!    [`Progress`] as shapes finish.
//!
//! # Examples
//!
//! ```
//! use gridpath_core::Geometry;
//! use gridpath_generator::CatalogGenerator;
//! use gridpath_solver::BacktrackSolver;
//!
//! let geometry = Geometry::new(3, 3)?;
//! let solver = BacktrackSolver::new(&geometry);
//! let catalog = CatalogGenerator::new(&solver).generate(8);
//!
//! for shape in &catalog.shapes {
//!     assert_eq!(shape.board.len(), 8);
//!     assert_eq!(shape.starts.len(), 8);
//! }
//! assert_eq!(catalog.stats.kept(), catalog.shapes.len() as u64);
//! # Ok::<(), gridpath_core::GridError>(())
//! ```

pub use self::catalog::{
    Catalog, CatalogGenerator, CatalogStats, Progress, ShapeReport, StartResult,
};

mod catalog;
pub mod canonical;
pub mod enumerate;
