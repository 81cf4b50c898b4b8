//! Depth-first Hamiltonian-path search over a board.

use std::fmt::{self, Display};

use gridpath_core::{Board, Cell, Direction, Geometry};

use crate::{Path, feasibility};

/// Counters collected during a search.
///
/// # Examples
///
/// ```
/// use gridpath_core::Geometry;
/// use gridpath_solver::{BacktrackSolver, SolverStats};
///
/// let geometry = Geometry::new(3, 3)?;
/// let solver = BacktrackSolver::new(&geometry);
/// let mut stats = SolverStats::default();
///
/// let start = geometry.encode(1, 1)?;
/// let outcome = solver.solve_with_stats(geometry.full_board(), start, &mut stats);
/// assert!(outcome.is_solved());
/// assert!(stats.nodes() >= 9);
/// # Ok::<(), gridpath_core::GridError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolverStats {
    nodes: u64,
    pruned: u64,
    backtracks: u64,
}

impl SolverStats {
    /// Returns the number of search states entered.
    ///
    /// Every state entered runs the feasibility checks once; this is the
    /// quantity limited by a node budget.
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Returns the number of states abandoned by the feasibility checks.
    #[must_use]
    pub fn pruned(&self) -> u64 {
        self.pruned
    }

    /// Returns the number of states abandoned after trying every direction.
    #[must_use]
    pub fn backtracks(&self) -> u64 {
        self.backtracks
    }

    /// Adds the counters of `other` to `self`.
    pub fn merge(&mut self, other: &Self) {
        self.nodes += other.nodes;
        self.pruned += other.pruned;
        self.backtracks += other.backtracks;
    }
}

/// The result of a search.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// A Hamiltonian path was found.
    Solved(Path),
    /// The search space was exhausted without finding a path.
    NoSolution,
    /// The node budget ran out before the search finished.
    ///
    /// Nothing is known about the board in this case.
    BudgetExhausted,
}

impl SolveOutcome {
    /// Returns the path, or an empty path for any other outcome.
    #[must_use]
    pub fn into_path(self) -> Path {
        match self {
            Self::Solved(path) => path,
            Self::NoSolution | Self::BudgetExhausted => Path::new(),
        }
    }

    /// Returns the path if one was found.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Solved(path) => Some(path),
            Self::NoSolution | Self::BudgetExhausted => None,
        }
    }
}

impl Display for SolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved(path) => write!(f, "solved ({} cells)", path.len()),
            Self::NoSolution => f.write_str("no solution"),
            Self::BudgetExhausted => f.write_str("node budget exhausted"),
        }
    }
}

/// Marker for a search cut short by the node budget.
#[derive(Debug)]
struct BudgetExhausted;

/// Depth-first Hamiltonian-path search with feasibility pruning.
///
/// From the current cell, the solver marks the cell visited and tries to move
/// [`Direction::Up`], [`Direction::Down`], [`Direction::Left`], then
/// [`Direction::Right`], recursing into each neighbor that is still present.
/// Before extending the path, every state is checked with
/// [`feasibility::is_board_possible`]; a remainder that is empty,
/// parity-imbalanced, or disconnected is abandoned immediately.
///
/// The exploration order is fixed, so the first solution found for a given
/// board and start cell is always the same.
///
/// Sub-boards reached along different partial paths are explored again; there
/// is no memoization.
///
/// # Examples
///
/// ```
/// use gridpath_core::Geometry;
/// use gridpath_solver::BacktrackSolver;
///
/// let geometry = Geometry::new(1, 3)?;
/// let solver = BacktrackSolver::new(&geometry);
///
/// let path = solver.solve(geometry.full_board(), geometry.encode(0, 0)?);
/// let coords: Vec<_> = path.iter().map(|&cell| geometry.decode(cell)).collect();
/// assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2)]);
///
/// // Starting in the middle of a row leaves one end unreachable.
/// let path = solver.solve(geometry.full_board(), geometry.encode(0, 1)?);
/// assert!(path.is_empty());
/// # Ok::<(), gridpath_core::GridError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BacktrackSolver<'a> {
    geometry: &'a Geometry,
    node_budget: Option<u64>,
}

impl<'a> BacktrackSolver<'a> {
    /// Creates an unbounded solver for boards of `geometry`.
    #[must_use]
    pub fn new(geometry: &'a Geometry) -> Self {
        Self {
            geometry,
            node_budget: None,
        }
    }

    /// Limits each search to `budget` nodes.
    ///
    /// A search that would enter more states ends with
    /// [`SolveOutcome::BudgetExhausted`].
    #[must_use]
    pub fn with_node_budget(mut self, budget: u64) -> Self {
        self.node_budget = Some(budget);
        self
    }

    /// Returns the geometry this solver works on.
    #[must_use]
    pub fn geometry(&self) -> &'a Geometry {
        self.geometry
    }

    /// Returns the node budget, if any.
    #[must_use]
    pub fn node_budget(&self) -> Option<u64> {
        self.node_budget
    }

    /// Searches for a Hamiltonian path of `board` starting at `start`.
    ///
    /// Returns an empty path if there is no solution, if `start` is not on the
    /// board, or if the node budget ran out. Use
    /// [`solve_with_stats`](Self::solve_with_stats) to tell these apart.
    #[must_use]
    pub fn solve(&self, board: Board, start: Cell) -> Path {
        let mut stats = SolverStats::default();
        self.solve_with_stats(board, start, &mut stats).into_path()
    }

    /// Searches for a Hamiltonian path, accumulating counters into `stats`.
    ///
    /// The budget applies to the nodes entered by this call, independent of
    /// what `stats` already holds.
    pub fn solve_with_stats(
        &self,
        board: Board,
        start: Cell,
        stats: &mut SolverStats,
    ) -> SolveOutcome {
        let mut search = SolverStats::default();
        let mut path = Path::with_capacity(board.len());
        let outcome = match self.try_extend(board, Some(start), &mut path, &mut search) {
            Ok(true) => SolveOutcome::Solved(path),
            Ok(false) => SolveOutcome::NoSolution,
            Err(BudgetExhausted) => {
                path.clear();
                SolveOutcome::BudgetExhausted
            }
        };
        log::debug!(
            "solve {board:?} from {:?}: {outcome} after {} nodes ({} pruned, {} backtracks)",
            self.geometry.decode(start),
            search.nodes,
            search.pruned,
            search.backtracks,
        );
        stats.merge(&search);
        outcome
    }

    fn try_extend(
        &self,
        board: Board,
        cell: Option<Cell>,
        path: &mut Path,
        stats: &mut SolverStats,
    ) -> Result<bool, BudgetExhausted> {
        let Some(cell) = cell else {
            return Ok(false);
        };
        if !board.contains(cell) {
            return Ok(false);
        }
        if self.node_budget.is_some_and(|budget| stats.nodes >= budget) {
            return Err(BudgetExhausted);
        }
        stats.nodes += 1;

        // Removing a cell can disconnect or unbalance the remainder, so the
        // checks run at every depth.
        if !feasibility::is_board_possible(self.geometry, board) {
            stats.pruned += 1;
            return Ok(false);
        }

        path.push(cell);
        if board.len() == 1 {
            return Ok(true);
        }

        let rest = board.without(cell);
        for direction in Direction::ALL {
            let next = self.geometry.step(rest, cell, direction);
            if self.try_extend(rest, next, path, stats)? {
                return Ok(true);
            }
        }

        path.pop();
        stats.backtracks += 1;
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn coords(geometry: &Geometry, path: &Path) -> Vec<(usize, usize)> {
        path.iter().map(|&cell| geometry.decode(cell)).collect()
    }

    #[test]
    fn test_full_2x2_from_corner() {
        let geometry = Geometry::new(2, 2).unwrap();
        let solver = BacktrackSolver::new(&geometry);
        let start = geometry.parse_cell("1:1").unwrap();
        let path = solver.solve(geometry.full_board(), start);

        assert_eq!(path.validate(&geometry, geometry.full_board()), Ok(()));
        // Down is tried before Right.
        assert_eq!(
            coords(&geometry, &path),
            vec![(0, 0), (1, 0), (1, 1), (0, 1)]
        );
    }

    #[test]
    fn test_single_row_has_unique_solution() {
        let geometry = Geometry::new(1, 3).unwrap();
        let solver = BacktrackSolver::new(&geometry);
        let path = solver.solve(geometry.full_board(), geometry.encode(0, 0).unwrap());
        assert_eq!(coords(&geometry, &path), vec![(0, 0), (0, 1), (0, 2)]);
    }

    #[test]
    fn test_diagonal_pair_has_no_solution() {
        let geometry = Geometry::new(2, 2).unwrap();
        let solver = BacktrackSolver::new(&geometry);
        let board = geometry.parse_board("1:1,2:2").unwrap();
        assert!(!feasibility::is_board_possible(&geometry, board));

        for start in board {
            let mut stats = SolverStats::default();
            let outcome = solver.solve_with_stats(board, start, &mut stats);
            assert_eq!(outcome, SolveOutcome::NoSolution);
            assert_eq!(stats.pruned(), 1);
            assert!(solver.solve(board, start).is_empty());
        }
    }

    #[test]
    fn test_3x3_from_center() {
        let geometry = Geometry::new(3, 3).unwrap();
        let solver = BacktrackSolver::new(&geometry);
        let start = geometry.encode(1, 1).unwrap();
        let path = solver.solve(geometry.full_board(), start);

        assert_eq!(path.len(), 9);
        assert_eq!(path.start(), Some(start));
        assert_eq!(path.validate(&geometry, geometry.full_board()), Ok(()));
    }

    #[test]
    fn test_3x3_from_edge_has_no_solution() {
        // Edge cells are in the smaller parity class, so a 9-cell path cannot
        // start there.
        let geometry = Geometry::new(3, 3).unwrap();
        let solver = BacktrackSolver::new(&geometry);
        let start = geometry.encode(0, 1).unwrap();
        assert!(solver.solve(geometry.full_board(), start).is_empty());
    }

    #[test]
    fn test_single_cell_board() {
        let geometry = Geometry::new(2, 2).unwrap();
        let solver = BacktrackSolver::new(&geometry);
        let cell = geometry.encode(1, 1).unwrap();
        let path = solver.solve(Board::from(cell), cell);
        assert_eq!(path.cells(), &[cell]);
    }

    #[test]
    fn test_start_not_on_board() {
        let geometry = Geometry::new(2, 2).unwrap();
        let solver = BacktrackSolver::new(&geometry);
        let removed = geometry.encode(0, 0).unwrap();
        let board = geometry.full_board().without(removed);
        let mut stats = SolverStats::default();
        assert_eq!(
            solver.solve_with_stats(board, removed, &mut stats),
            SolveOutcome::NoSolution
        );
        assert_eq!(stats.nodes(), 0);
    }

    #[test]
    fn test_budget_exhaustion_is_not_no_solution() {
        let geometry = Geometry::new(3, 3).unwrap();
        let start = geometry.encode(1, 1).unwrap();

        let tight = BacktrackSolver::new(&geometry).with_node_budget(3);
        let mut stats = SolverStats::default();
        let outcome = tight.solve_with_stats(geometry.full_board(), start, &mut stats);
        assert!(outcome.is_budget_exhausted());
        assert_eq!(stats.nodes(), 3);
        assert!(outcome.into_path().is_empty());

        let loose = BacktrackSolver::new(&geometry).with_node_budget(10_000);
        assert!(
            loose
                .solve_with_stats(geometry.full_board(), start, &mut SolverStats::default())
                .is_solved()
        );
    }

    #[test]
    fn test_stats_accumulate() {
        let geometry = Geometry::new(2, 2).unwrap();
        let solver = BacktrackSolver::new(&geometry);
        let start = geometry.encode(0, 0).unwrap();
        let mut stats = SolverStats::default();
        let _ = solver.solve_with_stats(geometry.full_board(), start, &mut stats);
        let first = stats.nodes();
        let _ = solver.solve_with_stats(geometry.full_board(), start, &mut stats);
        assert_eq!(stats.nodes(), first * 2);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_solutions_are_hamiltonian(bits in any::<u16>(), start_index in 0..16usize) {
            let geometry = Geometry::new(4, 4).unwrap();
            let board = Board::from_bits(u128::from(bits));
            let start = gridpath_core::Cell::from_index(start_index);
            prop_assume!(board.contains(start));

            let path = BacktrackSolver::new(&geometry).solve(board, start);
            if !path.is_empty() {
                prop_assert_eq!(path.len(), board.len());
                prop_assert_eq!(path.start(), Some(start));
                prop_assert_eq!(path.visited(), board);
                prop_assert_eq!(path.validate(&geometry, board), Ok(()));
            }
        }
    }
}
