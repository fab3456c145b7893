pub mod board;
pub mod config;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not player-specific)
pub use board::*;
pub use config::{ConfigError, PlayerConfig, PlayerKind};
pub use error::BoardError;
pub use movegen::{capture_run, flips, is_legal, legal_moves, legal_moves_into};
pub use perft::perft;
pub use types::*;

use serde::Serialize;

// =============================================================================
// Player trait: implemented by every move-selection strategy
// =============================================================================

/// Outcome of one move selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveChoice {
    /// The chosen move (None if the side has no legal move and must pass)
    pub best_move: Option<Position>,
    /// Net change in the mover's piece count if `best_move` is played
    pub gain: i32,
    /// Number of legal moves that were considered
    pub candidates: usize,
}

impl MoveChoice {
    /// No legal move: the caller should skip this side's turn.
    pub fn pass() -> Self {
        Self {
            best_move: None,
            gain: 0,
            candidates: 0,
        }
    }
}

/// A move-selection actor bound to one side.
///
/// Players hold no board state between calls; the game loop owns the
/// authoritative board and applies the returned move with
/// [`Board::apply_move`].
pub trait Player: Send {
    /// The side this player moves for.
    fn side(&self) -> Side;

    /// Pick a move for `self.side()` on `board`.
    fn choose_move(&mut self, board: &Board) -> MoveChoice;

    /// The chosen position, or `None` when there is no legal move.
    fn next_move(&mut self, board: &Board) -> Option<Position> {
        self.choose_move(board).best_move
    }

    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "othello-greedy"
    }
}
