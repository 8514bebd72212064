//! Utility to run bots against each other and report the results.
use crate::ai::Bot;
use crate::board::Board;
use crate::wdl::{NonPov, WDL};

#[derive(Debug)]
pub struct BotGameResult {
    pub game_count: u32,
    /// Results counted from `bot_l`'s point of view.
    pub wdl_l: WDL<u32>,
    pub average_game_length: f32,
}

/// Run `bot_l` against `bot_r` from the position given by `start`.
///
/// `games_per_side` games are played from fresh starts; if `both_sides` is set each game
/// is played twice with the bots swapping colors. Games that somehow outlast `max_moves`
/// are counted as draws, so a runner with weak bots can never hang a test.
pub fn run<B: Board>(
    start: impl Fn() -> B,
    bot_l: &mut impl Bot<B>,
    bot_r: &mut impl Bot<B>,
    games_per_side: u32,
    both_sides: bool,
    max_moves: u64,
) -> BotGameResult {
    let game_count = if both_sides { 2 * games_per_side } else { games_per_side };

    let mut wdl_l = WDL::<u32>::default();
    let mut total_moves = 0;

    for game_i in 0..game_count {
        let flip = both_sides && game_i % 2 == 1;

        let mut board = start();
        let player_l = if flip {
            board.next_player().other()
        } else {
            board.next_player()
        };

        let mut moves = 0;
        let outcome = loop {
            if let Some(outcome) = board.outcome() {
                break Some(outcome);
            }
            if moves >= max_moves {
                break None;
            }

            let mv = if board.next_player() == player_l {
                bot_l.select_move(&board).unwrap()
            } else {
                bot_r.select_move(&board).unwrap()
            };
            board.play(mv).unwrap();
            moves += 1;
        };

        total_moves += moves;
        match outcome {
            Some(outcome) => wdl_l += outcome.pov(player_l).to_wdl(),
            None => {
                wdl_l += WDL {
                    win: 0,
                    draw: 1,
                    loss: 0,
                }
            }
        }
    }

    BotGameResult {
        game_count,
        wdl_l,
        average_game_length: total_moves as f32 / game_count as f32,
    }
}
