//! Random Move Othello Player
//!
//! Picks uniformly among the legal moves of its side.
//! Useful as a baseline: the greedy player should beat it comfortably.

use othello_core::{legal_moves_into, Board, MoveChoice, Player, Position, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;


/// A player that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    side: Side,
    rng: StdRng,
    moves: Vec<Position>,
}

impl RandomPlayer {
    pub fn new(side: Side) -> Self {
        Self::from_rng(side, StdRng::from_entropy())
    }

    /// Reproducible player: the same seed replays the same choices.
    pub fn with_seed(side: Side, seed: u64) -> Self {
        Self::from_rng(side, StdRng::seed_from_u64(seed))
    }

    fn from_rng(side: Side, rng: StdRng) -> Self {
        Self {
            side,
            rng,
            moves: Vec::with_capacity(32),
        }
    }
}

impl Player for RandomPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn choose_move(&mut self, board: &Board) -> MoveChoice {
        legal_moves_into(board, self.side, &mut self.moves);

        let Some(&pos) = self.moves.choose(&mut self.rng) else {
            return MoveChoice::pass();
        };
        let gain = 1 + board.flips(self.side, pos).len() as i32;
        debug!(side = %self.side, %pos, gain, candidates = self.moves.len(), "random move");

        MoveChoice {
            best_move: Some(pos),
            gain,
            candidates: self.moves.len(),
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
