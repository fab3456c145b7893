use serde::{Deserialize, Serialize};
use std::fmt;

/// Board edge length. The board is always `SIZE x SIZE`.
pub const SIZE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Black, Side::White];

    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// The cell state a piece of this side occupies.
    pub fn cell(self) -> Cell {
        match self {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => f.write_str("black"),
            Side::White => f.write_str("white"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Owner of the piece in this cell, `None` when empty.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Side::Black),
            Cell::White => Some(Side::White),
        }
    }

    /// Diagram symbol: `B`, `W` or `.`.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Cell> {
        match ch {
            '.' | '-' => Some(Cell::Empty),
            'B' | 'b' | 'X' | 'x' => Some(Cell::Black),
            'W' | 'w' | 'O' | 'o' => Some(Cell::White),
            _ => None,
        }
    }
}

/// The eight ray directions. Rows grow towards the south.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit vector as `(row_delta, col_delta)`.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}

/// A board coordinate. May point off the board after a `translate`;
/// check `is_off_board` before using it as an index.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// One step in `dir`.
    pub fn translate(self, dir: Direction) -> Position {
        let (dr, dc) = dir.delta();
        Position::new(self.row + dr, self.col + dc)
    }

    pub fn is_off_board(self) -> bool {
        let size = SIZE as i8;
        !(0..size).contains(&self.row) || !(0..size).contains(&self.col)
    }

    /// Row-major index in `0..64`, `None` when off the board.
    pub fn index(self) -> Option<usize> {
        if self.is_off_board() {
            None
        } else {
            Some(self.row as usize * SIZE + self.col as usize)
        }
    }

    pub fn from_index(index: usize) -> Option<Position> {
        if index < SIZE * SIZE {
            Some(Position::new((index / SIZE) as i8, (index % SIZE) as i8))
        } else {
            None
        }
    }

    /// Every on-board position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SIZE * SIZE).filter_map(Position::from_index)
    }

    /// Column letter followed by 1-based row, e.g. `(2, 3)` is `"d3"`.
    pub fn to_coord(self) -> Option<String> {
        if self.is_off_board() {
            return None;
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'1' + self.row as u8) as char;
        Some(format!("{file}{rank}"))
    }

    pub fn from_coord(c: &str) -> Option<Position> {
        let b = c.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let file = b[0].to_ascii_lowercase();
        let rank = b[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Position::new((rank - b'1') as i8, (file - b'a') as i8))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_coord() {
            Some(coord) => f.write_str(&coord),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
