//! Command-line interface for solving and generating connect-a-graph puzzles.
//!
//! # Usage
//!
//! Solve a 3x3 board with the top-right cell removed, starting from the
//! top-left corner:
//!
//! ```sh
//! gridpath solve 3 3 1:1 --removed 1:3
//! ```
//!
//! Solve every distinct 8-cell shape of a 3x4 grid from each start cell:
//!
//! ```sh
//! gridpath generate 3 4 8
//! ```
//!
//! Cells are written as 1-based `ROW:COL`. Set `RUST_LOG=info` to see
//! progress, or `RUST_LOG=debug` for every search.
//!
//! Exits with 1 when `solve` finds no path, and with 2 on invalid arguments.

use std::process;

use clap::{Parser, Subcommand};
use gridpath_cli::render;
use gridpath_core::{Board, Cell, Geometry, GridError};
use gridpath_generator::{Catalog, CatalogGenerator};
use gridpath_solver::{BacktrackSolver, SolveOutcome, SolverStats, feasibility};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find a path through one board from one start cell.
    Solve {
        /// Number of rows.
        height: usize,
        /// Number of columns.
        width: usize,
        /// Start cell as ROW:COL.
        start: String,
        /// Comma-separated cells to remove, as ROW:COL.
        #[arg(short, long, value_name = "LIST", default_value = "")]
        removed: String,
        /// Give up after entering this many search states.
        #[arg(long, value_name = "NODES")]
        node_budget: Option<u64>,
    },
    /// Solve every distinct board shape with a given number of cells.
    Generate {
        /// Number of rows.
        height: usize,
        /// Number of columns.
        width: usize,
        /// Number of cells present on each board.
        cells: usize,
        /// Give up on a start cell after entering this many search states.
        #[arg(long, value_name = "NODES")]
        node_budget: Option<u64>,
        /// Print only start cells that have a path.
        #[arg(long)]
        solvable_only: bool,
    },
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let result = match &args.command {
        Command::Solve {
            height,
            width,
            start,
            removed,
            node_budget,
        } => solve(*height, *width, start, removed, *node_budget),
        Command::Generate {
            height,
            width,
            cells,
            node_budget,
            solvable_only,
        } => generate(*height, *width, *cells, *node_budget, *solvable_only).map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(2);
        }
    }
}

fn build_solver(geometry: &Geometry, node_budget: Option<u64>) -> BacktrackSolver<'_> {
    let solver = BacktrackSolver::new(geometry);
    match node_budget {
        Some(budget) => solver.with_node_budget(budget),
        None => solver,
    }
}

fn solve(
    height: usize,
    width: usize,
    start: &str,
    removed: &str,
    node_budget: Option<u64>,
) -> Result<bool, GridError> {
    let geometry = Geometry::new(height, width)?;
    let board = geometry.parse_board(removed)?;
    let start = geometry.parse_cell(start)?;
    let solver = build_solver(&geometry, node_budget);

    println!("Board:");
    println!("{}", render::board(&geometry, board, Some(start)));
    print_start(&geometry, start);
    println!();

    if !board.contains(start) {
        println!("No solution: the start cell is removed");
        return Ok(false);
    }
    if let Err(reason) = feasibility::check_board(&geometry, board) {
        println!("No solution: {reason}");
        return Ok(false);
    }

    let mut stats = SolverStats::default();
    let outcome = solver.solve_with_stats(board, start, &mut stats);
    log::info!(
        "{} nodes, {} pruned, {} backtracks",
        stats.nodes(),
        stats.pruned(),
        stats.backtracks()
    );
    print_outcome(&geometry, &outcome);
    Ok(outcome.is_solved())
}

fn generate(
    height: usize,
    width: usize,
    cells: usize,
    node_budget: Option<u64>,
    solvable_only: bool,
) -> Result<(), GridError> {
    let geometry = Geometry::new(height, width)?;
    let solver = build_solver(&geometry, node_budget);
    let catalog = CatalogGenerator::new(&solver).generate(cells);

    for shape in &catalog.shapes {
        for start in &shape.starts {
            if solvable_only && !start.outcome.is_solved() {
                continue;
            }
            print_board(&geometry, shape.board, start.start);
            print_outcome(&geometry, &start.outcome);
            println!();
        }
    }
    print_summary(&catalog);
    Ok(())
}

fn print_board(geometry: &Geometry, board: Board, start: Cell) {
    println!("{}", render::board(geometry, board, Some(start)));
    print_start(geometry, start);
}

fn print_start(geometry: &Geometry, start: Cell) {
    let (row, col) = geometry.decode(start);
    println!("Start: ({}, {})", row + 1, col + 1);
}

fn print_outcome(geometry: &Geometry, outcome: &SolveOutcome) {
    match outcome {
        SolveOutcome::Solved(path) => println!("{}", render::path(geometry, path)),
        SolveOutcome::NoSolution => println!("No solution"),
        SolveOutcome::BudgetExhausted => println!("Node budget exhausted"),
    }
}

fn print_summary(catalog: &Catalog) {
    let stats = &catalog.stats;
    println!("Summary:");
    println!("  Boards enumerated: {}", stats.enumerated);
    println!("  Duplicate shapes: {}", stats.duplicates);
    println!("  Infeasible shapes: {}", stats.infeasible);
    println!("  Shapes solved: {}", catalog.shapes.len());
    println!("  Solvable starts: {}", stats.solvable_starts);
    println!("  Unsolvable starts: {}", stats.unsolvable_starts);
    println!("  Budget-exhausted starts: {}", stats.exhausted_starts);
    println!("  Search nodes: {}", stats.solver.nodes());
}
