//! Legal-move detection by ray-casting.
//!
//! From a candidate cell, walk outward in each of the eight directions.
//! A direction captures when it crosses one or more opponent pieces and
//! then lands on a piece of the mover. Empty cells and the board edge end
//! the walk without a capture.

use crate::{
    board::Board,
    types::{Cell, Direction, Position, Side},
};

/// Length of the bracketed opponent run starting next to `pos` in `dir`.
///
/// Returns 0 when the direction does not capture, including when a
/// same-side piece sits directly next to `pos`.
pub fn capture_run(board: &Board, side: Side, pos: Position, dir: Direction) -> usize {
    let own = side.cell();
    let other = side.opponent().cell();

    let mut step = pos.translate(dir);
    let mut count = 0;
    while let Some(cell) = board.cell_at(step) {
        if cell == other {
            count += 1;
            step = step.translate(dir);
        } else if cell == own {
            return count;
        } else {
            return 0;
        }
    }
    0
}

/// `pos` is empty and at least one direction brackets opponent pieces.
pub fn is_legal(board: &Board, side: Side, pos: Position) -> bool {
    if board.cell_at(pos) != Some(Cell::Empty) {
        return false;
    }
    Direction::ALL
        .iter()
        .any(|&dir| capture_run(board, side, pos, dir) > 0)
}

/// Every opponent cell that playing at `pos` would flip.
///
/// Empty for an illegal move.
pub fn flips(board: &Board, side: Side, pos: Position) -> Vec<Position> {
    let mut out = Vec::new();
    if board.cell_at(pos) != Some(Cell::Empty) {
        return out;
    }
    for dir in Direction::ALL {
        let run = capture_run(board, side, pos, dir);
        let mut step = pos;
        for _ in 0..run {
            step = step.translate(dir);
            out.push(step);
        }
    }
    out
}

/// Fill `moves` with the legal moves of `side` in row-major order.
pub fn legal_moves_into(board: &Board, side: Side, moves: &mut Vec<Position>) {
    moves.clear();
    moves.extend(Position::all().filter(|&pos| is_legal(board, side, pos)));
}

pub fn legal_moves(board: &Board, side: Side) -> Vec<Position> {
    let mut moves = Vec::with_capacity(32);
    legal_moves_into(board, side, &mut moves);
    moves
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
