use std::collections::HashSet;

use internal_iterator::InternalIterator;

use planner_games::board::{Board, BoardDone};
use planner_games::util::consistent_rng;

#[cfg(feature = "game_go")]
mod go;
#[cfg(feature = "game_omok")]
mod omok;

/// Consistency checks every test position goes through, for any game.
pub fn board_test_main<B: Board>(board: &B) {
    test_available_moves(board);
    test_clone_and_play(board);
    test_random_available_move(board);
}

fn test_available_moves<B: Board>(board: &B) {
    match board.available_moves() {
        Err(BoardDone) => {
            assert!(board.is_done(), "only done boards may refuse to list moves");
        }
        Ok(moves) => {
            assert!(!board.is_done());

            let moves: Vec<B::Move> = moves.collect();
            assert!(!moves.is_empty(), "available moves must be nonempty on a live board");

            let unique: HashSet<B::Move> = moves.iter().copied().collect();
            assert_eq!(unique.len(), moves.len(), "available moves must be unique");

            let all: Vec<B::Move> = B::all_possible_moves().collect();
            let all: HashSet<B::Move> = all.into_iter().collect();
            for &mv in &moves {
                assert!(all.contains(&mv), "{} not in all_possible_moves", mv);
                assert_eq!(Ok(true), board.is_available_move(mv));
            }

            // listing moves twice yields the same list
            let again: Vec<B::Move> = board.available_moves().unwrap().collect();
            assert_eq!(moves, again);
        }
    }
}

fn test_clone_and_play<B: Board>(board: &B) {
    if board.is_done() {
        return;
    }

    let before = board.clone();
    board.available_moves().unwrap().for_each(|mv: B::Move| {
        let child = board.clone_and_play(mv).unwrap();
        assert_ne!(&child, board, "playing {} must change the board", mv);
        assert_eq!(&before, board, "clone_and_play must leave the original untouched");
    });
}

fn test_random_available_move<B: Board>(board: &B) {
    if board.is_done() {
        return;
    }

    let mut rng = consistent_rng();
    let available: Vec<B::Move> = board.available_moves().unwrap().collect();
    let available: HashSet<B::Move> = available.into_iter().collect();

    for _ in 0..100 {
        let mv = board.random_available_move(&mut rng).unwrap();
        assert!(available.contains(&mv), "sampled unavailable move {}", mv);
    }
}

/// Play the given moves one by one, printing every intermediate board for debuggability.
pub fn print_board_with_moves<B: Board>(start: B, moves: &[B::Move]) -> B {
    let mut curr = start;
    println!("{}", curr);

    for &mv in moves {
        assert_eq!(Ok(true), curr.is_available_move(mv), "move {} not available", mv);
        curr.play(mv).unwrap();
        println!("playing {}\n{}", mv, curr);
    }

    curr
}
