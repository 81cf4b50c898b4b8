//! Text rendering of boards and paths.
//!
//! Boards are drawn one character per cell: [`PRESENT`] for present cells,
//! [`REMOVED`] for removed ones, and [`START_MARKER`] for the chosen start.
//! Paths are drawn with box-drawing characters over a [`BACKGROUND`] of cells
//! the path does not visit.

use gridpath_core::{Board, Cell, Direction, Geometry};
use gridpath_solver::Path;

/// A cell present on the board.
pub const PRESENT: char = '█';
/// A removed cell.
pub const REMOVED: char = ' ';
/// The start cell of a board.
pub const START_MARKER: char = '*';
/// A cell not visited by the rendered path.
pub const BACKGROUND: char = '*';
/// A path made of a single cell.
pub const LONE_CELL: char = '□';
/// A path cell whose neighbors in the path are not adjacent to it.
pub const BROKEN: char = '?';

/// Renders `board`, marking `start` if given.
///
/// A start cell that is not on the board is drawn as removed, like any other
/// missing cell.
///
/// Rows are separated by `\n`, with no trailing newline.
///
/// # Examples
///
/// ```
/// use gridpath_cli::render;
/// use gridpath_core::Geometry;
///
/// let geometry = Geometry::new(2, 3)?;
/// let board = geometry.parse_board("2:3")?;
/// let start = geometry.parse_cell("1:1")?;
/// assert_eq!(render::board(&geometry, board, Some(start)), "*██\n██ ");
/// # Ok::<(), gridpath_core::GridError>(())
/// ```
#[must_use]
pub fn board(geometry: &Geometry, board: Board, start: Option<Cell>) -> String {
    let mut canvas = Canvas::new(geometry, REMOVED);
    for cell in board {
        canvas.set(geometry, cell, PRESENT);
    }
    if let Some(start) = start
        && board.contains(start)
    {
        canvas.set(geometry, start, START_MARKER);
    }
    canvas.into_string()
}

/// Renders `path` over a background of unvisited cells.
///
/// The first cell shows the direction it leaves in, the last cell the
/// direction it is entered from, and every other cell the turn it makes.
///
/// # Examples
///
/// ```
/// use gridpath_cli::render;
/// use gridpath_core::Geometry;
/// use gridpath_solver::BacktrackSolver;
///
/// let geometry = Geometry::new(2, 2)?;
/// let solver = BacktrackSolver::new(&geometry);
/// let path = solver.solve(geometry.full_board(), geometry.encode(0, 0)?);
/// assert_eq!(render::path(&geometry, &path), "╥╥\n╚╝");
/// # Ok::<(), gridpath_core::GridError>(())
/// ```
#[must_use]
pub fn path(geometry: &Geometry, path: &Path) -> String {
    let mut canvas = Canvas::new(geometry, BACKGROUND);
    if let [cell] = path.cells() {
        canvas.set(geometry, *cell, LONE_CELL);
        return canvas.into_string();
    }

    let directions = path.directions(geometry).collect::<Vec<_>>();
    let last = path.len().saturating_sub(1);
    for (i, &cell) in path.iter().enumerate() {
        let glyph = if i == 0 {
            directions[0].map(start_cap)
        } else if i == last {
            directions[i - 1].map(end_cap)
        } else {
            directions[i - 1].zip(directions[i]).map(|(incoming, outgoing)| {
                segment(incoming, outgoing)
            })
        };
        canvas.set(geometry, cell, glyph.unwrap_or(BROKEN));
    }
    canvas.into_string()
}

/// The glyph of a path's first cell, leaving towards `outgoing`.
#[must_use]
pub fn start_cap(outgoing: Direction) -> char {
    match outgoing {
        Direction::Up => '╨',
        Direction::Down => '╥',
        Direction::Left => '╡',
        Direction::Right => '╞',
    }
}

/// The glyph of a path's last cell, entered by moving `incoming`.
#[must_use]
pub fn end_cap(incoming: Direction) -> char {
    start_cap(incoming.opposite())
}

/// The glyph of an inner path cell entered by moving `incoming` and left by
/// moving `outgoing`.
#[must_use]
pub fn segment(incoming: Direction, outgoing: Direction) -> char {
    use Direction::{Down, Left, Right, Up};

    match (incoming, outgoing) {
        (Up | Down, Up | Down) => '║',
        (Left | Right, Left | Right) => '═',
        (Up, Left) | (Right, Down) => '╗',
        (Down, Right) | (Left, Up) => '╚',
        (Left, Down) | (Up, Right) => '╔',
        (Right, Up) | (Down, Left) => '╝',
    }
}

struct Canvas {
    rows: Vec<Vec<char>>,
}

impl Canvas {
    fn new(geometry: &Geometry, fill: char) -> Self {
        Self {
            rows: vec![vec![fill; geometry.width()]; geometry.height()],
        }
    }

    fn set(&mut self, geometry: &Geometry, cell: Cell, glyph: char) {
        let (row, col) = geometry.decode(cell);
        self.rows[row][col] = glyph;
    }

    fn into_string(self) -> String {
        self.rows
            .into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
