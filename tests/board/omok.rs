use planner_games::board::{Board, Outcome, PlayError, Player};
use planner_games::games::omok::OmokBoard;
use planner_games::games::tile::Tile;
use planner_games::util::board_gen::board_with_moves;

use crate::{board_test_main, print_board_with_moves};

#[test]
fn empty_board() {
    let board = OmokBoard::new(9);

    assert_eq!(board.next_player(), Player::A);
    assert_eq!(board.outcome(), None);
    assert_eq!(board.check_winner(), None);
    assert_eq!(board.stones_placed(), 0);

    board_test_main(&board);
}

#[test]
fn fen_loopback() {
    let moves = [(4, 4), (3, 3), (4, 5), (5, 5)].map(|(x, y)| Tile::new(x, y));
    let board = board_with_moves(OmokBoard::new(9), &moves);

    assert_eq!(OmokBoard::from_fen(&board.to_fen()).as_ref(), Ok(&board));
    board_test_main(&board);
}

/// Five black stones in row 6, exactly the fifth placement flips the winner.
#[test]
fn fifth_stone_wins() {
    // black walks along row y=5, white answers along the bottom edge
    let moves = [
        (2, 5),
        (0, 0),
        (3, 5),
        (1, 0),
        (4, 5),
        (2, 0),
        (5, 5),
        (3, 0),
    ]
    .map(|(x, y)| Tile::new(x, y));

    let board = print_board_with_moves(OmokBoard::new(9), &moves);
    assert_eq!(board.check_winner(), None, "four in a row must not win");
    assert_eq!(board.outcome(), None);

    let won = board.clone_and_play(Tile::new(6, 5)).unwrap();
    assert_eq!(won.check_winner(), Some(Player::A));
    assert_eq!(won.outcome(), Some(Outcome::WonBy(Player::A)));

    board_test_main(&won);
}

#[test]
fn exactly_four_never_wins() {
    for fen in [
        "........./........./........./........./.bbbb..../........./........./........./......... w",
        // four with both ends open
        "........./........./....w..../..bbbb.../....w..../........./........./........./......... w",
        // broken five
        "........./........./........./.bb.bb.../........./........./........./........./......... w",
    ] {
        let board = OmokBoard::from_fen(fen).unwrap();
        assert_eq!(board.check_winner(), None, "no win expected in {}", fen);
        assert_eq!(board.outcome(), None);
    }
}

#[test]
fn wins_in_every_direction() {
    let cases = [
        // horizontal
        ("........./........./........./........./.wwwww.../........./........./........./......... b", Player::B),
        // vertical
        (".b......./.b......./.b......./.b......./.b......./........./........./........./......... w", Player::A),
        // rising diagonal
        ("........./....b..../...b...../..b....../.b......./b......../........./........./......... w", Player::A),
        // falling diagonal
        ("w......../.w......./..w....../...w...../....w..../........./........./........./......... b", Player::B),
    ];

    for (fen, winner) in cases {
        let board = OmokBoard::from_fen(fen).unwrap();
        assert_eq!(board.check_winner(), Some(winner), "winner mismatch in {}", fen);
        assert_eq!(board.outcome(), Some(Outcome::WonBy(winner)));
    }
}

/// A run longer than five still wins.
#[test]
fn overline_wins() {
    let board =
        OmokBoard::from_fen("........./........./.bbbbbb../........./........./........./........./........./......... w")
            .unwrap();
    assert_eq!(board.check_winner(), Some(Player::A));
}

#[test]
fn win_detection_is_idempotent() {
    let moves = [(4, 4), (3, 3), (5, 5), (2, 2)].map(|(x, y)| Tile::new(x, y));
    let board = board_with_moves(OmokBoard::new(9), &moves);

    assert_eq!(board.check_winner(), board.check_winner());

    let copy = board.clone();
    let _ = board.check_winner();
    assert_eq!(board, copy, "check_winner must not mutate the board");
}

#[test]
fn occupied_and_out_of_bounds_rejected() {
    let mut board = board_with_moves(OmokBoard::new(9), &[Tile::new(4, 4)]);
    let copy = board.clone();

    assert_eq!(board.is_available_move(Tile::new(4, 4)), Ok(false));
    assert_eq!(board.play(Tile::new(4, 4)), Err(PlayError::UnavailableMove));

    assert_eq!(board.is_available_move(Tile::new(12, 3)), Ok(false));
    assert_eq!(board.play(Tile::new(12, 3)), Err(PlayError::UnavailableMove));

    assert_eq!(board, copy);
}

/// A full board without five in a row is a draw. The win run is longer than a 3x3 board,
/// so simply filling one up must end in a draw.
#[test]
fn full_board_draws() {
    let mut board = OmokBoard::new(3);
    for tile in Tile::all(3) {
        board.play(tile).unwrap();
    }

    assert_eq!(board.stones_placed(), 9);
    assert_eq!(board.outcome(), Some(Outcome::Draw));
}

/// A crafted full 5x5 position with no run of five anywhere.
#[test]
fn full_board_draw_from_fen() {
    let board = OmokBoard::from_fen("bbwwb/wwbbw/bbwwb/wwbbw/bbwwb w").unwrap();

    assert_eq!(board.stones_placed(), 25);
    assert_eq!(board.check_winner(), None);
    assert_eq!(board.outcome(), Some(Outcome::Draw));

    board_test_main(&board);
}

#[test]
fn done_board_rejects_everything() {
    let mut board = OmokBoard::new(3);
    for tile in Tile::all(3) {
        board.play(tile).unwrap();
    }

    assert!(board.is_done());
    assert_eq!(board.is_available_move(Tile::new(0, 0)), Err(planner_games::board::BoardDone));
    assert_eq!(board.play(Tile::new(0, 0)), Err(PlayError::BoardDone));
}
