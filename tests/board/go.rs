use planner_games::board::{Board, Outcome, PlayError, Player};
use planner_games::games::go::{GoBoard, IllegalMove, Move, Tile};
use planner_games::util::board_gen::board_with_moves;

use crate::{board_test_main, print_board_with_moves};

#[test]
fn tile() {
    let cases = [
        // basic
        ((0, 0), "A1"),
        ((1, 0), "B1"),
        ((0, 1), "A2"),
        // i skipped
        ((7, 0), "H1"),
        ((8, 0), "J1"),
        ((9, 0), "K1"),
        // largest tile on the boards the planner uses
        ((12, 12), "N13"),
        // largest supported tile
        ((18, 18), "T19"),
    ];

    for ((x, y), s) in cases {
        let tile = Tile::new(x, y);
        assert_eq!(tile.to_string(), s);
        assert_eq!(tile, s.parse().unwrap());
    }
}

#[test]
fn empty_board() {
    let board = GoBoard::new(5);

    assert_eq!(board.to_fen(), "...../...../...../...../..... b 0");
    assert_eq!(GoBoard::from_fen(&board.to_fen()).as_ref(), Ok(&board));
    assert_eq!(board.next_player(), Player::A);
    assert_eq!(board.outcome(), None);
    assert_eq!(board.captured_by(Player::A), 0);
    assert_eq!(board.captured_by(Player::B), 0);

    board_test_main(&board);
}

#[test]
fn fen_loopback() {
    let tiles = [(3, 3), (4, 3), (3, 2), (0, 1), (0, 4), (4, 4), (1, 0)];
    let board = board_with_moves(
        GoBoard::new(5),
        &tiles.map(|(x, y)| Move::Place(Tile::new(x, y))),
    );

    assert_eq!("b...w/...bw/...b./w..../.b... w 0", board.to_fen());

    let board_pass = board.clone_and_play(Move::Pass).unwrap();
    assert_eq!("b...w/...bw/...b./w..../.b... b 1", board_pass.to_fen());

    let board_done = board_pass.clone_and_play(Move::Pass).unwrap();
    assert_eq!("b...w/...bw/...b./w..../.b... w 2", board_done.to_fen());

    for board in [board, board_pass, board_done] {
        assert_eq!(GoBoard::from_fen(&board.to_fen()).as_ref(), Ok(&board));
        board_test_main(&board);
    }
}

#[test]
fn clear_corner() {
    let start = GoBoard::new(5);
    let moves = [(0, 0), (0, 1), (4, 4), (1, 0)].map(|(x, y)| Move::Place(Tile::new(x, y)));

    let board = print_board_with_moves(start, &moves);
    assert_eq!(board.stone_at(Tile::new(0, 0)), None);
    assert_eq!(board.captured_by(Player::B), 1);
    assert_eq!(board.captured_by(Player::A), 0);

    board_test_main(&board);
}

/// The three-stone corner group loses its last liberty and comes off in one move.
#[test]
fn capture_corner_group() {
    // black builds the corner group, white surrounds it
    let moves = [(0, 0), (0, 2), (0, 1), (1, 1), (1, 0)].map(|(x, y)| Move::Place(Tile::new(x, y)));

    let board = board_with_moves(GoBoard::new(9), &moves);

    let group = board.group_at(Tile::new(0, 0)).unwrap();
    assert_eq!(group.color, Player::A);
    assert_eq!(group.stone_count(), 3);
    assert_eq!(group.liberties, 1);

    // white fills the last liberty: exactly those three stones come off
    let (after, captured) = board.place_and_resolve(Tile::new(2, 0)).unwrap();
    assert_eq!(captured, 3);
    for (x, y) in [(0, 0), (0, 1), (1, 0)] {
        assert_eq!(after.stone_at(Tile::new(x, y)), None);
    }
    assert_eq!(after.stone_at(Tile::new(2, 0)), Some(Player::B));
    assert_eq!(after.captured_by(Player::B), 3);

    // the white stones are untouched
    for (x, y) in [(0, 2), (1, 1)] {
        assert_eq!(after.stone_at(Tile::new(x, y)), Some(Player::B));
    }

    board_test_main(&after);
}

#[test]
fn capture_inner_group() {
    let board = GoBoard::from_fen("...../.w.../wbw../b.bw./bbw.. w 0").unwrap();
    let result = print_board_with_moves(board, &[Move::Place(Tile::new(1, 1))]);

    assert_eq!(result.to_fen(), "...../.w.../w.w../.w.w./..w.. b 0");
    assert_eq!(result.captured_by(Player::B), 5);

    board_test_main(&result);
}

#[test]
fn suicide_rejected_in_full() {
    // the point at (1, 3) is completely surrounded by white; black may not play into it
    let board = GoBoard::from_fen(".w.../w.w../.w.../...../..... b 0").unwrap();
    let eye = Tile::new(1, 3);

    assert_eq!(board.place_and_resolve(eye), Err(IllegalMove::Suicide));
    assert_eq!(board.is_available_move(Move::Place(eye)), Ok(false));

    // rejection leaves the board byte for byte as it was
    let mut copy = board.clone();
    assert_eq!(copy.play(Move::Place(eye)), Err(PlayError::UnavailableMove));
    assert_eq!(copy, board);
    assert_eq!(copy.captured_by(Player::A), 0);

    board_test_main(&board);
}

/// A move into the last own liberty is legal when it captures first.
#[test]
fn self_atari_with_capture_is_legal() {
    // black at (0, 0) is in atari; white playing there first removes it, so the white
    // stone ends up with a liberty and the move stands
    let board = GoBoard::from_fen("...../...../w..../bw.../.b... w 0").unwrap();

    let (after, captured) = board.place_and_resolve(Tile::new(0, 0)).unwrap();
    assert_eq!(captured, 1);
    assert_eq!(after.stone_at(Tile::new(0, 0)), Some(Player::B));
    // the captured black stone is gone, which is what gave the new stone its liberty
    assert_eq!(after.stone_at(Tile::new(0, 1)), None);
    assert_eq!(after.group_at(Tile::new(0, 0)).unwrap().liberties, 1);

    board_test_main(&after);
}

#[test]
fn out_of_bounds_and_occupied_rejected() {
    let board = board_with_moves(GoBoard::new(5), &[Move::Place(Tile::new(2, 2))]);

    assert_eq!(
        board.place_and_resolve(Tile::new(2, 2)),
        Err(IllegalMove::Occupied)
    );
    assert_eq!(
        board.place_and_resolve(Tile::new(7, 7)),
        Err(IllegalMove::OutOfBounds)
    );
    assert_eq!(board.is_available_move(Move::Place(Tile::new(7, 7))), Ok(false));
}

#[test]
fn group_analysis_is_idempotent() {
    let board = GoBoard::from_fen("bb.../bw.../.wwb./...b./bb.w. b 0").unwrap();

    for tile in Tile::all(board.size()) {
        let first = board.group_at(tile);
        let second = board.group_at(tile);
        assert_eq!(first, second);
        assert_eq!(first.is_some(), board.stone_at(tile).is_some());
    }

    let corner = board.group_at(Tile::new(0, 4)).unwrap();
    assert_eq!(corner.color, Player::A);
    assert_eq!(corner.stone_count(), 3);
    assert_eq!(corner.liberties, 2);
}

#[test]
fn double_pass_draw() {
    let board = print_board_with_moves(GoBoard::new(5), &[Move::Pass, Move::Pass]);
    assert_eq!(board.outcome(), Some(Outcome::Draw));

    board_test_main(&board);
}

#[test]
fn double_pass_scores_by_captures() {
    // black captures one stone, then both sides pass
    let moves = [
        Move::Place(Tile::new(1, 0)),
        Move::Place(Tile::new(0, 0)),
        Move::Place(Tile::new(0, 1)),
        Move::Pass,
        Move::Pass,
    ];
    let board = print_board_with_moves(GoBoard::new(5), &moves);

    assert_eq!(board.captured_by(Player::A), 1);
    assert_eq!(board.captured_by(Player::B), 0);
    assert_eq!(board.outcome(), Some(Outcome::WonBy(Player::A)));
}

#[test]
fn placement_breaks_pass_streak() {
    let moves = [Move::Pass, Move::Place(Tile::new(2, 2)), Move::Pass, Move::Pass];
    let board = board_with_moves(GoBoard::new(5), &moves);

    // only the last two passes count towards ending the game
    assert_eq!(board.outcome(), Some(Outcome::Draw));

    let not_done = board_with_moves(
        GoBoard::new(5),
        &[Move::Pass, Move::Place(Tile::new(2, 2)), Move::Pass],
    );
    assert_eq!(not_done.outcome(), None);
}

#[test]
fn done_board_rejects_everything() {
    let board = board_with_moves(GoBoard::new(5), &[Move::Pass, Move::Pass]);

    assert!(board.is_done());
    assert_eq!(board.is_available_move(Move::Pass), Err(planner_games::board::BoardDone));

    let mut copy = board.clone();
    assert_eq!(copy.play(Move::Pass), Err(PlayError::BoardDone));
    assert_eq!(copy, board);
}
