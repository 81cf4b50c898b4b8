//! Bulk solving of every distinct board shape with a given cell count.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{Duration, Instant},
};

use gridpath_core::{Board, Cell};
use gridpath_solver::{BacktrackSolver, SolveOutcome, SolverStats, feasibility};
use rayon::prelude::*;

use crate::{canonical, enumerate};

/// The outcome of solving one board from one start cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartResult {
    /// The cell the path starts from.
    pub start: Cell,
    /// What the search found.
    pub outcome: SolveOutcome,
}

/// Every start cell of one kept board, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeReport {
    /// The canonical, feasible board.
    pub board: Board,
    /// One entry per present cell.
    pub starts: Vec<StartResult>,
}

impl ShapeReport {
    /// Returns `true` if the board has a solution from at least one start.
    #[must_use]
    pub fn has_solution(&self) -> bool {
        self.starts.iter().any(|start| start.outcome.is_solved())
    }

    /// Returns the start cells from which a path was found.
    pub fn solvable_starts(&self) -> impl Iterator<Item = Cell> + '_ {
        self.starts
            .iter()
            .filter(|start| start.outcome.is_solved())
            .map(|start| start.start)
    }
}

/// Counters for one catalog run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    /// Boards produced by the enumerator.
    pub enumerated: u64,
    /// Boards dropped because they are a translation of an earlier shape.
    pub duplicates: u64,
    /// Canonical boards dropped by the parity or connectivity check.
    pub infeasible: u64,
    /// Start cells with a path.
    pub solvable_starts: u64,
    /// Start cells proven to have no path.
    pub unsolvable_starts: u64,
    /// Start cells whose search ran out of budget.
    pub exhausted_starts: u64,
    /// Solver counters summed over every search.
    pub solver: SolverStats,
}

impl CatalogStats {
    /// Returns the number of boards that were solved.
    #[must_use]
    pub fn kept(&self) -> u64 {
        self.enumerated - self.duplicates - self.infeasible
    }

    fn record(&mut self, outcome: &SolveOutcome) {
        match outcome {
            SolveOutcome::Solved(_) => self.solvable_starts += 1,
            SolveOutcome::NoSolution => self.unsolvable_starts += 1,
            SolveOutcome::BudgetExhausted => self.exhausted_starts += 1,
        }
    }
}

/// A snapshot of a running [`CatalogGenerator::generate_with_progress`] call.
///
/// One snapshot is reported per solved shape. Shapes finish on several threads
/// at once, so snapshots may arrive out of order, but every value of
/// `shapes_done` from 1 to `shapes_total` is reported exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Shapes solved so far, including the one just finished.
    pub shapes_done: u64,
    /// Shapes to solve in this run.
    pub shapes_total: u64,
    /// Start cells searched so far.
    pub starts_done: u64,
    /// Start cells to search in this run.
    pub starts_total: u64,
    /// Start cells with a path found so far.
    pub found: u64,
    /// Time since solving began.
    pub elapsed: Duration,
}

impl Progress {
    /// Estimates the time left, assuming the remaining shapes take as long as
    /// the finished ones on average.
    ///
    /// Returns `None` before the first shape is done.
    #[must_use]
    pub fn eta(&self) -> Option<Duration> {
        if self.shapes_done == 0 {
            return None;
        }
        let remaining = self.shapes_total.saturating_sub(self.shapes_done);
        #[expect(clippy::cast_precision_loss)]
        let ratio = remaining as f64 / self.shapes_done as f64;
        Some(self.elapsed.mul_f64(ratio))
    }

    /// Returns `true` for the snapshots worth logging: every whole percent of
    /// the shapes, and the last one.
    #[must_use]
    pub fn is_milestone(&self) -> bool {
        let step = self.shapes_total.div_ceil(100).max(1);
        self.shapes_done % step == 0 || self.shapes_done == self.shapes_total
    }
}

fn log_progress(progress: &Progress) {
    if !progress.is_milestone() {
        return;
    }
    log::info!(
        "iterated {}/{} shapes ({}/{} starts), found {}; {:.1?} elapsed, ETA {:.1?}",
        progress.shapes_done,
        progress.shapes_total,
        progress.starts_done,
        progress.starts_total,
        progress.found,
        progress.elapsed,
        progress.eta().unwrap_or_default(),
    );
}

/// The result of [`CatalogGenerator::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Kept boards in enumeration order.
    pub shapes: Vec<ShapeReport>,
    /// Run counters.
    pub stats: CatalogStats,
}

/// Enumerates, deduplicates, filters, and solves boards of one geometry.
///
/// # Examples
///
/// ```
/// use gridpath_core::Geometry;
/// use gridpath_generator::CatalogGenerator;
/// use gridpath_solver::BacktrackSolver;
///
/// let geometry = Geometry::new(2, 2)?;
/// let solver = BacktrackSolver::new(&geometry);
/// let catalog = CatalogGenerator::new(&solver).generate(3);
///
/// // The four L-trominoes are distinct shapes; none is a translation of another.
/// assert_eq!(catalog.shapes.len(), 4);
/// assert_eq!(catalog.stats.enumerated, 4);
/// assert!(catalog.shapes.iter().all(|shape| shape.has_solution()));
/// # Ok::<(), gridpath_core::GridError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CatalogGenerator<'a> {
    solver: &'a BacktrackSolver<'a>,
}

impl<'a> CatalogGenerator<'a> {
    /// Creates a generator that solves with `solver`.
    #[must_use]
    pub fn new(solver: &'a BacktrackSolver<'a>) -> Self {
        Self { solver }
    }

    /// Returns the boards with `count` cells that would be solved.
    ///
    /// A board is kept if it is canonical and passes the feasibility checks.
    /// The counters for enumerated, duplicate, and infeasible boards are added
    /// to `stats`.
    pub fn shapes(&self, count: usize, stats: &mut CatalogStats) -> Vec<Board> {
        let geometry = self.solver.geometry();
        let mut kept = vec![];
        for board in enumerate::all_boards_with_cell_count(geometry, count) {
            stats.enumerated += 1;
            if !canonical::is_canonical(geometry, board) {
                stats.duplicates += 1;
                continue;
            }
            if !feasibility::is_board_possible(geometry, board) {
                stats.infeasible += 1;
                continue;
            }
            kept.push(board);
        }
        kept
    }

    /// Solves every kept board with `count` cells from each of its cells.
    ///
    /// Boards are solved in parallel; the returned shapes are in enumeration
    /// order. Progress is logged at info level every whole percent.
    #[must_use]
    pub fn generate(&self, count: usize) -> Catalog {
        self.generate_with_progress(count, log_progress)
    }

    /// Like [`generate`](Self::generate), but calls `on_progress` after each
    /// shape is solved instead of logging.
    ///
    /// `on_progress` runs on the worker threads.
    pub fn generate_with_progress<F>(&self, count: usize, on_progress: F) -> Catalog
    where
        F: Fn(&Progress) + Sync,
    {
        let geometry = self.solver.geometry();
        match enumerate::binomial(geometry.area(), count) {
            Some(total) => log::info!(
                "{}x{} with {count} cells: enumerating {total} boards",
                geometry.height(),
                geometry.width(),
            ),
            None => log::info!(
                "{}x{} with {count} cells: enumerating more than {} boards",
                geometry.height(),
                geometry.width(),
                u128::MAX,
            ),
        }

        let mut stats = CatalogStats::default();
        let boards = self.shapes(count, &mut stats);
        log::info!(
            "{} enumerated, {} duplicates, {} infeasible, {} to solve",
            stats.enumerated,
            stats.duplicates,
            stats.infeasible,
            boards.len(),
        );

        let shapes_total = boards.len() as u64;
        let starts_total = shapes_total * count as u64;
        let shapes_done = AtomicU64::new(0);
        let starts_done = AtomicU64::new(0);
        let found = AtomicU64::new(0);
        let started = Instant::now();

        let solved = boards
            .into_par_iter()
            .map(|board| {
                let (shape, solver_stats) = self.solve_shape(board);
                let solvable = shape.solvable_starts().count() as u64;
                let found = found.fetch_add(solvable, Ordering::Relaxed) + solvable;
                let starts_done =
                    starts_done.fetch_add(shape.starts.len() as u64, Ordering::Relaxed)
                        + shape.starts.len() as u64;
                let shapes_done = shapes_done.fetch_add(1, Ordering::Relaxed) + 1;
                on_progress(&Progress {
                    shapes_done,
                    shapes_total,
                    starts_done,
                    starts_total,
                    found,
                    elapsed: started.elapsed(),
                });
                (shape, solver_stats)
            })
            .collect::<Vec<_>>();

        let mut shapes = Vec::with_capacity(solved.len());
        for (shape, solver_stats) in solved {
            for start in &shape.starts {
                stats.record(&start.outcome);
            }
            stats.solver.merge(&solver_stats);
            shapes.push(shape);
        }
        log::info!(
            "{} solvable starts, {} unsolvable, {} exhausted; {} nodes in {:.1?}",
            stats.solvable_starts,
            stats.unsolvable_starts,
            stats.exhausted_starts,
            stats.solver.nodes(),
            started.elapsed(),
        );
        Catalog { shapes, stats }
    }

    fn solve_shape(&self, board: Board) -> (ShapeReport, SolverStats) {
        let mut solver_stats = SolverStats::default();
        let starts = board
            .iter()
            .map(|start| StartResult {
                start,
                outcome: self.solver.solve_with_stats(board, start, &mut solver_stats),
            })
            .collect::<Vec<_>>();
        log::debug!(
            "{board:?}: {} of {} starts solvable",
            starts.iter().filter(|start| start.outcome.is_solved()).count(),
            starts.len(),
        );
        (ShapeReport { board, starts }, solver_stats)
    }
}
