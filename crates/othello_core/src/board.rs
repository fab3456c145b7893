use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    error::BoardError,
    movegen,
    types::{Cell, Direction, Position, Side, SIZE},
};

/// An 8x8 grid of cell states.
///
/// `Clone` is a full value copy, which is how hypothetical moves are
/// evaluated without touching the authoritative board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Standard opening: white on d4/e5, black on e4/d5 (rows/cols 3 and 4).
    pub fn startpos() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::White;
        board.cells[3][4] = Cell::Black;
        board.cells[4][3] = Cell::Black;
        board.cells[4][4] = Cell::White;
        board
    }

    /// Parse a text diagram: one line per row, `B` black, `W` white,
    /// `.` empty. Whitespace between cells and blank lines are ignored.
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != SIZE {
            return Err(BoardError::InvalidDiagram(format!(
                "expected {SIZE} rows, found {}",
                rows.len()
            )));
        }

        let mut board = Self::empty();
        for (r, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != SIZE {
                return Err(BoardError::InvalidDiagram(format!(
                    "row {r} has {} cells, expected {SIZE}",
                    cells.len()
                )));
            }
            for (c, &ch) in cells.iter().enumerate() {
                board.cells[r][c] = Cell::from_symbol(ch).ok_or_else(|| {
                    BoardError::InvalidDiagram(format!("unknown cell symbol {ch:?} in row {r}"))
                })?;
            }
        }
        Ok(board)
    }

    /// Cell at `pos`, or `None` when `pos` is off the board.
    #[inline]
    pub fn cell_at(&self, pos: Position) -> Option<Cell> {
        if pos.is_off_board() {
            None
        } else {
            Some(self.cells[pos.row as usize][pos.col as usize])
        }
    }

    pub fn get_cell(&self, pos: Position) -> Result<Cell, BoardError> {
        self.cell_at(pos).ok_or(BoardError::OutOfRange(pos))
    }

    /// Overwrite a cell unconditionally.
    pub fn set_cell(&mut self, cell: Cell, pos: Position) -> Result<(), BoardError> {
        if pos.is_off_board() {
            return Err(BoardError::OutOfRange(pos));
        }
        self.cells[pos.row as usize][pos.col as usize] = cell;
        Ok(())
    }

    pub fn count_pieces(&self, side: Side) -> usize {
        self.count_cells(side.cell())
    }

    pub fn count_empty(&self) -> usize {
        self.count_cells(Cell::Empty)
    }

    fn count_cells(&self, target: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == target)
            .count()
    }

    pub fn is_legal(&self, side: Side, pos: Position) -> bool {
        movegen::is_legal(self, side, pos)
    }

    pub fn legal_moves(&self, side: Side) -> Vec<Position> {
        movegen::legal_moves(self, side)
    }

    pub fn has_any_legal_move(&self, side: Side) -> bool {
        Position::all().any(|pos| movegen::is_legal(self, side, pos))
    }

    /// Opponent cells that playing `side` at `pos` would flip.
    pub fn flips(&self, side: Side, pos: Position) -> Vec<Position> {
        movegen::flips(self, side, pos)
    }

    /// Place a piece for `side` at `pos` and flip every bracketed run.
    ///
    /// Returns the number of flipped cells. Illegal moves are rejected
    /// and leave the board unchanged.
    pub fn apply_move(&mut self, side: Side, pos: Position) -> Result<usize, BoardError> {
        if !movegen::is_legal(self, side, pos) {
            return Err(BoardError::IllegalMove {
                side,
                position: pos,
            });
        }

        // Runs must be measured before anything changes.
        let runs: Vec<(Direction, usize)> = Direction::ALL
            .iter()
            .map(|&dir| (dir, movegen::capture_run(self, side, pos, dir)))
            .filter(|&(_, run)| run > 0)
            .collect();

        let own = side.cell();
        self.cells[pos.row as usize][pos.col as usize] = own;

        let mut flipped = 0;
        for (dir, run) in runs {
            let mut step = pos;
            for _ in 0..run {
                step = step.translate(dir);
                self.cells[step.row as usize][step.col as usize] = own;
            }
            flipped += run;
        }
        Ok(flipped)
    }

    /// Rows top to bottom, as in `from_diagram`.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
