/// Grid height in rows. Row 0 is the top, row `ROWS - 1` the bottom.
pub const ROWS: usize = 13;
/// Grid width in columns.
pub const COLS: usize = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Wall,
}

/// Direction of a column shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDir {
    Up,
    Down,
}

impl ShiftDir {
    /// Apply the one-cell rotation to a single row index, with wraparound.
    ///
    /// This is the same rule `Grid::shift_column` applies to cells; mice in a
    /// shifted column move their row through it.
    pub fn step(self, row: usize) -> usize {
        match self {
            ShiftDir::Up => {
                if row == 0 {
                    ROWS - 1
                } else {
                    row - 1
                }
            }
            ShiftDir::Down => {
                if row == ROWS - 1 {
                    0
                } else {
                    row + 1
                }
            }
        }
    }

    /// Lowercase name for log lines.
    pub fn name(self) -> &'static str {
        match self {
            ShiftDir::Up => "up",
            ShiftDir::Down => "down",
        }
    }
}

/// The fixed playing field: walls and empty space. Mice live outside the
/// grid, in `GameState`, so several of them can share a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; COLS]; ROWS],
}

impl Grid {
    /// Create a grid with every cell empty.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a position.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Overwrite the cell at a position. Used by the layout generator and by
    /// tests that build deterministic layouts.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Number of wall cells in a column. Invariant under `shift_column`.
    pub fn wall_count(&self, col: usize) -> usize {
        (0..ROWS).filter(|&row| self.cells[row][col] == Cell::Wall).count()
    }

    /// Rotate a column's cells by one position with wraparound: shifting up
    /// moves the top cell to the bottom, shifting down the reverse. Cells are
    /// never created or destroyed, so the column's wall count is preserved.
    pub fn shift_column(&mut self, col: usize, dir: ShiftDir) {
        match dir {
            ShiftDir::Up => {
                let top = self.cells[0][col];
                for row in 0..ROWS - 1 {
                    self.cells[row][col] = self.cells[row + 1][col];
                }
                self.cells[ROWS - 1][col] = top;
            }
            ShiftDir::Down => {
                let bottom = self.cells[ROWS - 1][col];
                for row in (1..ROWS).rev() {
                    self.cells[row][col] = self.cells[row - 1][col];
                }
                self.cells[0][col] = bottom;
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
