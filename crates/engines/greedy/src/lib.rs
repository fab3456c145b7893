//! Greedy Othello Player
//!
//! Plays the move that leaves it with the most pieces on the board right
//! after the move. Every legal move is tried on a copy of the board and
//! scored by the change in the mover's piece count. No look-ahead.
//!
//! Ties go to the first maximal move in row-major order, so the same
//! board always produces the same move.

use othello_core::{Board, MoveChoice, Player, Position, Side, SIZE};
use tracing::{debug, trace, warn};

#[cfg(test)]
mod lib_tests;

/// Gain of every legal move on one board, keyed by position.
///
/// Rebuilt on each selection and never shared between calls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GainTable {
    gains: [[Option<i32>; SIZE]; SIZE],
}

impl GainTable {
    /// Gain recorded for `pos`, `None` when `pos` is not a legal move.
    pub fn get(&self, pos: Position) -> Option<i32> {
        if pos.is_off_board() {
            return None;
        }
        self.gains[pos.row as usize][pos.col as usize]
    }

    fn insert(&mut self, pos: Position, gain: i32) {
        if !pos.is_off_board() {
            self.gains[pos.row as usize][pos.col as usize] = Some(gain);
        }
    }

    /// Recorded `(position, gain)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, i32)> + '_ {
        Position::all().filter_map(move |pos| self.get(pos).map(|gain| (pos, gain)))
    }

    pub fn len(&self) -> usize {
        self.gains.iter().flatten().filter(|g| g.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The position with the greatest gain.
    ///
    /// The running maximum starts from the first recorded move and is only
    /// replaced on a strictly greater gain, so ties resolve to the earliest
    /// position in row-major order.
    pub fn best(&self) -> Option<(Position, i32)> {
        let mut entries = self.iter();
        let mut best = entries.next()?;
        for (pos, gain) in entries {
            if gain > best.1 {
                best = (pos, gain);
            }
        }
        Some(best)
    }
}

/// Score every legal move of `side` on `board`.
///
/// `board` is never modified; each candidate is played on its own clone.
pub fn evaluate_moves(board: &Board, side: Side) -> GainTable {
    let baseline = board.count_pieces(side) as i32;
    let mut table = GainTable::default();

    for pos in board.legal_moves(side) {
        let mut hypothesis = board.clone();
        if let Err(err) = hypothesis.apply_move(side, pos) {
            warn!(%side, %pos, %err, "legal move rejected by board");
            continue;
        }
        let gain = hypothesis.count_pieces(side) as i32 - baseline;
        trace!(%side, %pos, gain, "candidate");
        table.insert(pos, gain);
    }
    table
}

fn choose(board: &Board, side: Side) -> MoveChoice {
    if !board.has_any_legal_move(side) {
        debug!(%side, "no legal move");
        return MoveChoice::pass();
    }

    let table = evaluate_moves(board, side);
    match table.best() {
        Some((pos, gain)) => {
            debug!(%side, %pos, gain, candidates = table.len(), "greedy move");
            MoveChoice {
                best_move: Some(pos),
                gain,
                candidates: table.len(),
            }
        }
        None => MoveChoice::pass(),
    }
}

/// The greedy move for `side`, or `None` when `side` has to pass.
pub fn select_move(board: &Board, side: Side) -> Option<Position> {
    choose(board, side).best_move
}

/// Greedy player bound to one side. Holds no other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyPlayer {
    side: Side,
}

impl GreedyPlayer {
    pub fn new(side: Side) -> Self {
        Self { side }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn select(&self, board: &Board) -> Option<Position> {
        select_move(board, self.side)
    }
}

impl Player for GreedyPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn choose_move(&mut self, board: &Board) -> MoveChoice {
        choose(board, self.side)
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }
}
