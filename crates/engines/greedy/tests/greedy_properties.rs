//! The greedy choice agrees with a brute-force count of flips on
//! positions taken from random games.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

use greedy_player::{evaluate_moves, select_move, GreedyPlayer};
use othello_core::{Board, Player, Side};

fn random_positions(seed: u64) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::startpos();
    let mut side = Side::Black;
    let mut out = Vec::new();
    loop {
        out.push(board.clone());
        match board.legal_moves(side).choose(&mut rng) {
            Some(&mv) => {
                board.apply_move(side, mv).unwrap();
            }
            None if !board.has_any_legal_move(side.opponent()) => break,
            None => {}
        }
        side = side.opponent();
    }
    out
}

#[test]
fn greedy_move_has_maximal_flip_count() {
    (0..150u64).into_par_iter().for_each(|seed| {
        for board in random_positions(seed) {
            for side in Side::BOTH {
                let legal = board.legal_moves(side);
                let chosen = select_move(&board, side);
                if legal.is_empty() {
                    assert_eq!(chosen, None);
                    continue;
                }

                let gains: Vec<i32> = legal
                    .iter()
                    .map(|&mv| 1 + board.flips(side, mv).len() as i32)
                    .collect();
                let max = *gains.iter().max().unwrap();
                let first_max = legal[gains.iter().position(|&g| g == max).unwrap()];

                assert_eq!(chosen, Some(first_max), "seed {seed}\n{board}");

                let table = evaluate_moves(&board, side);
                assert_eq!(table.len(), legal.len());
                assert_eq!(table.best(), Some((first_max, max)));
            }
        }
    });
}

#[test]
fn greedy_move_is_always_legal_and_repeatable() {
    for seed in 0..30u64 {
        for board in random_positions(seed) {
            for side in Side::BOTH {
                let mut player = GreedyPlayer::new(side);
                let first = player.choose_move(&board);
                let second = player.choose_move(&board);
                assert_eq!(first, second);
                if let Some(mv) = first.best_move {
                    assert!(board.is_legal(side, mv));
                    let mut after = board.clone();
                    after.apply_move(side, mv).unwrap();
                    assert_eq!(
                        after.count_pieces(side) as i32 - board.count_pieces(side) as i32,
                        first.gain
                    );
                }
            }
        }
    }
}

#[test]
fn greedy_self_play_fills_the_game() {
    // Two greedy players alternate until neither can move.
    let mut board = Board::startpos();
    let mut black = GreedyPlayer::new(Side::Black);
    let mut white = GreedyPlayer::new(Side::White);
    let mut side = Side::Black;
    let mut passes = 0;
    while passes < 2 {
        let player: &mut dyn Player = match side {
            Side::Black => &mut black,
            Side::White => &mut white,
        };
        match player.next_move(&board) {
            Some(mv) => {
                board.apply_move(side, mv).unwrap();
                passes = 0;
            }
            None => passes += 1,
        }
        side = side.opponent();
    }
    assert!(!board.has_any_legal_move(Side::Black));
    assert!(!board.has_any_legal_move(Side::White));
    assert_eq!(
        board.count_pieces(Side::Black) + board.count_pieces(Side::White) + board.count_empty(),
        64
    );
}
