use crate::{
    board::Board,
    movegen::legal_moves_into,
    types::{Position, Side},
};

/// Leaf count of the move tree below `board` with `side` to move.
///
/// A side with no legal move passes, which still consumes a ply. A node
/// where neither side can move is a leaf.
pub fn perft(board: &Board, side: Side, depth: u8) -> u64 {
    fn inner(board: &Board, side: Side, depth: u8, layers: &mut [Vec<Position>]) -> u64 {
        if depth == 0 {
            return 1;
        }
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(board, side, buf);
        if buf.is_empty() {
            if !board.has_any_legal_move(side.opponent()) {
                return 1;
            }
            return inner(board, side.opponent(), depth - 1, rest);
        }

        let mut nodes = 0u64;
        for &mv in buf.iter() {
            let mut child = board.clone();
            if child.apply_move(side, mv).is_ok() {
                nodes += inner(&child, side.opponent(), depth - 1, rest);
            }
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(board, side, depth, &mut layers[..])
}
