use super::*;
use othello_core::{Cell, Player};

fn pos(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

fn board(diagram: &str) -> Board {
    Board::from_diagram(diagram).unwrap()
}

#[test]
fn opening_moves_all_gain_two() {
    let table = evaluate_moves(&Board::startpos(), Side::Black);
    let entries: Vec<_> = table.iter().collect();
    assert_eq!(
        entries,
        vec![(pos(2, 3), 2), (pos(3, 2), 2), (pos(4, 5), 2), (pos(5, 4), 2)]
    );
    assert_eq!(table.len(), 4);
    assert_eq!(table.get(pos(0, 0)), None);
}

#[test]
fn opening_tie_goes_to_first_in_scan_order() {
    let board = Board::startpos();
    let player = GreedyPlayer::new(Side::Black);
    for _ in 0..5 {
        assert_eq!(player.select(&board), Some(pos(2, 3)));
    }
    assert_eq!(select_move(&board, Side::White), Some(pos(2, 4)));
}

#[test]
fn playing_the_greedy_opening_move() {
    let mut board = Board::startpos();
    let mv = select_move(&board, Side::Black).unwrap();
    board.apply_move(Side::Black, mv).unwrap();

    assert_eq!(board.count_pieces(Side::Black), 4);
    assert_eq!(board.count_pieces(Side::White), 1);
    assert_eq!(board.get_cell(pos(4, 4)), Ok(Cell::White));
}

#[test]
fn picks_the_strictly_larger_gain() {
    let board = board(
        "
        ........
        .WWB....
        ........
        ........
        ........
        ........
        BWWW....
        ........
        ",
    );
    let table = evaluate_moves(&board, Side::Black);
    assert_eq!(table.iter().collect::<Vec<_>>(), vec![(pos(1, 0), 3), (pos(6, 4), 4)]);

    let mut player = GreedyPlayer::new(Side::Black);
    let choice = player.choose_move(&board);
    assert_eq!(choice.best_move, Some(pos(6, 4)));
    assert_eq!(choice.gain, 4);
    assert_eq!(choice.candidates, 2);
}

#[test]
fn tie_between_distant_moves_is_stable() {
    let board = board(
        "
        ........
        .WWB....
        ........
        ........
        ........
        ........
        BWW.....
        ........
        ",
    );
    let table = evaluate_moves(&board, Side::Black);
    assert_eq!(table.get(pos(1, 0)), Some(3));
    assert_eq!(table.get(pos(6, 3)), Some(3));
    assert_eq!(table.len(), 2);

    let mut player = GreedyPlayer::new(Side::Black);
    for _ in 0..3 {
        assert_eq!(player.next_move(&board), Some(pos(1, 0)));
    }
}

#[test]
fn seeds_from_first_legal_move_when_corner_is_not_legal() {
    // Only legal move is the far corner; nothing earlier in scan order
    // may stand in as the starting maximum.
    let board = board(
        "
        ........
        ........
        ........
        ........
        ........
        .......B
        .......W
        ........
        ",
    );
    assert_eq!(board.legal_moves(Side::Black), vec![pos(7, 7)]);
    assert_eq!(select_move(&board, Side::Black), Some(pos(7, 7)));

    let table = evaluate_moves(&board, Side::Black);
    assert_eq!(table.best(), Some((pos(7, 7), 2)));
}

#[test]
fn fully_blocked_side_passes() {
    let full = board(
        "
        BBBBBBBB
        BBBBBBBB
        BBBBBBBB
        BBBBBBBB
        WWWWWWWW
        WWWWWWWW
        WWWWWWWW
        WWWWWWWW
        ",
    );
    let no_black = board(
        "
        .WWWWWWW
        WWWWWWWW
        WWWWWWWW
        WWWWWWWW
        WWWWWWWW
        WWWWWWWW
        WWWWWWWW
        WWWWWWWW
        ",
    );
    for b in [&full, &no_black, &Board::empty()] {
        for side in Side::BOTH {
            assert!(!b.has_any_legal_move(side));
            assert_eq!(select_move(b, side), None);

            let mut player = GreedyPlayer::new(side);
            assert_eq!(player.choose_move(b), MoveChoice::pass());
            assert!(evaluate_moves(b, side).is_empty());
        }
    }
}

#[test]
fn selection_does_not_touch_the_board() {
    let board = Board::startpos();
    let before = board.clone();
    let mut player = GreedyPlayer::new(Side::White);
    let first = player.next_move(&board);
    let second = player.next_move(&board);
    assert_eq!(first, second);
    assert_eq!(board, before);
}

#[test]
fn empty_table_has_no_best() {
    let table = GainTable::default();
    assert!(table.is_empty());
    assert_eq!(table.best(), None);
    assert_eq!(table.get(pos(-1, 4)), None);
}

#[test]
fn player_reports_side_and_name() {
    let player = GreedyPlayer::new(Side::White);
    assert_eq!(Player::side(&player), Side::White);
    assert_eq!(player.name(), "Greedy v1.0");
    assert_eq!(player.author(), "othello-greedy");
}

#[test]
fn move_choice_serializes() {
    let mut player = GreedyPlayer::new(Side::Black);
    let choice = player.choose_move(&Board::startpos());
    let json = serde_json::to_value(&choice).unwrap();
    assert_eq!(json["best_move"]["row"], 2);
    assert_eq!(json["best_move"]["col"], 3);
    assert_eq!(json["gain"], 2);
    assert_eq!(json["candidates"], 4);
}
