use crate::error::GameError;

use super::Player;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Pieces in a row needed to win. Also the smallest legal board side.
pub const RUN_LENGTH: usize = 4;

/// Step vectors (row, col) scanned from every cell: horizontal, vertical,
/// diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Piece(Player),
}

/// A `rows` x `cols` grid stored row-major. Row 0 is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board, rejecting anything smaller than 4x4
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        if rows < RUN_LENGTH || cols < RUN_LENGTH {
            return Err(GameError::InvalidDimensions {
                height: rows,
                width: cols,
            });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// A fresh empty board with the same dimensions
    pub fn cleared(&self) -> Self {
        Board {
            rows: self.rows,
            cols: self.cols,
            cells: vec![Cell::Empty; self.rows * self.cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row `rows - 1` is the bottom.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside a {}x{} board",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Lowest empty row in `col`, scanning from the bottom up.
    /// `Ok(None)` means the column is full.
    pub fn find_landing_row(&self, col: usize) -> Result<Option<usize>, GameError> {
        if col >= self.cols {
            return Err(GameError::InvalidColumn {
                column: col,
                width: self.cols,
            });
        }

        Ok((0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty))
    }

    /// Drop a piece in a column, returns the row where it landed.
    /// The board is untouched on error.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, GameError> {
        let row = self
            .find_landing_row(col)?
            .ok_or(GameError::ColumnFull(col))?;
        self.set(row, col, cell);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Number of pieces on the board
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Check whether `player` owns any four-cell run anywhere on the board
    pub fn check_win(&self, player: Player) -> bool {
        self.winning_run(player).is_some()
    }

    /// First winning run for `player` in row-major scan order, as
    /// `(row, col)` positions from the starting cell outward.
    pub fn winning_run(&self, player: Player) -> Option<[(usize, usize); RUN_LENGTH]> {
        let target = player.to_cell();

        for row in 0..self.rows {
            for col in 0..self.cols {
                for &step in &DIRECTIONS {
                    let Some(run) = self.run_from(row, col, step) else {
                        continue;
                    };
                    if run.iter().all(|&(r, c)| self.get(r, c) == target) {
                        return Some(run);
                    }
                }
            }
        }

        None
    }

    /// The four positions starting at (row, col) along `step`, or `None`
    /// if any of them falls off the board.
    fn run_from(
        &self,
        row: usize,
        col: usize,
        (dr, dc): (isize, isize),
    ) -> Option<[(usize, usize); RUN_LENGTH]> {
        let mut run = [(0, 0); RUN_LENGTH];
        for (i, slot) in run.iter_mut().enumerate() {
            let r = row.checked_add_signed(dr * i as isize)?;
            let c = col.checked_add_signed(dc * i as isize)?;
            if r >= self.rows || c >= self.cols {
                return None;
            }
            *slot = (r, c);
        }
        Some(run)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLS],
        }
    }
}
