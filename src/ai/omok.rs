//! The difficulty-tiered Omok opponent.
use std::cmp::Reverse;
use std::fmt::{Debug, Formatter};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::{Bot, Difficulty};
use crate::board::{Board, BoardDone, Player};
use crate::games::omok::{OmokBoard, LINE_DIRECTIONS};
use crate::games::tile::Tile;

/// Tuning for one [OmokBot] tier. Constructed through [OmokAiConfig::for_difficulty],
/// validated in [OmokAiConfig::new].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OmokAiConfig {
    pub difficulty: Difficulty,
    /// Candidates are empty tiles within this Chebyshev distance of an existing stone.
    /// Strong moves always touch the action, so 1 or 2 rings are enough.
    pub candidate_ring: u8,
    /// How many of the highest scoring candidates stay in the running.
    pub top_candidates: usize,
    /// Pick among the finalists weighted by score instead of taking the best.
    pub weighted_pick: bool,
    /// Chance to ignore the best move and take a weighted pick instead.
    pub mistake_rate: f64,
    /// Evaluate the opponent's best answer to each finalist and subtract it.
    pub lookahead: bool,
}

impl OmokAiConfig {
    pub fn new(
        difficulty: Difficulty,
        candidate_ring: u8,
        top_candidates: usize,
        weighted_pick: bool,
        mistake_rate: f64,
        lookahead: bool,
    ) -> OmokAiConfig {
        assert!(
            (1..=2).contains(&candidate_ring),
            "candidate_ring {} outside 1..=2",
            candidate_ring
        );
        assert!(top_candidates >= 1, "need at least one finalist");
        assert!(
            (0.0..=1.0).contains(&mistake_rate),
            "mistake_rate {} outside [0, 1]",
            mistake_rate
        );

        OmokAiConfig {
            difficulty,
            candidate_ring,
            top_candidates,
            weighted_pick,
            mistake_rate,
            lookahead,
        }
    }

    pub fn for_difficulty(difficulty: Difficulty) -> OmokAiConfig {
        match difficulty {
            Difficulty::Easy => OmokAiConfig::new(difficulty, 1, 8, true, 0.0, false),
            Difficulty::Medium => OmokAiConfig::new(difficulty, 2, 6, false, 0.15, false),
            Difficulty::Hard => OmokAiConfig::new(difficulty, 2, 8, false, 0.0, true),
        }
    }
}

// Shape values for a single direction through a candidate tile. The exact numbers are game
// tuning; the ordering win > open four > blocked four > open three > blocked three >
// open two > blocked two is the part that must hold.
const SHAPE_WIN: i64 = 100_000;
const SHAPE_OPEN_FOUR: i64 = 10_000;
const SHAPE_BLOCKED_FOUR: i64 = 2_500;
const SHAPE_OPEN_THREE: i64 = 1_200;
const SHAPE_BLOCKED_THREE: i64 = 300;
const SHAPE_OPEN_TWO: i64 = 120;
const SHAPE_BLOCKED_TWO: i64 = 30;

fn shape_value(run: u16, open_ends: u8) -> i64 {
    match (run, open_ends) {
        (run, _) if run >= OmokBoard::WIN_RUN => SHAPE_WIN,
        (4, 2) => SHAPE_OPEN_FOUR,
        (4, 1) => SHAPE_BLOCKED_FOUR,
        (3, 2) => SHAPE_OPEN_THREE,
        (3, 1) => SHAPE_BLOCKED_THREE,
        (2, 2) => SHAPE_OPEN_TWO,
        (2, 1) => SHAPE_BLOCKED_TWO,
        _ => 0,
    }
}

/// The house Omok opponent.
pub struct OmokBot<R: Rng> {
    config: OmokAiConfig,
    rng: R,
}

impl<R: Rng> Debug for OmokBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "OmokBot {{ config: {:?} }}", self.config)
    }
}

impl<R: Rng> OmokBot<R> {
    pub fn new(difficulty: Difficulty, rng: R) -> Self {
        Self::with_config(OmokAiConfig::for_difficulty(difficulty), rng)
    }

    pub fn with_config(config: OmokAiConfig, rng: R) -> Self {
        OmokBot { config, rng }
    }

    fn weighted_pick(&mut self, scored: &[(Tile, i64)]) -> Tile {
        scored
            .choose_weighted(&mut self.rng, |&(_, score)| score.max(1) as u64)
            .expect("finalists are nonempty with positive weights")
            .0
    }

    fn pick_lookahead(&mut self, board: &OmokBoard, scored: &[(Tile, i64)], me: Player) -> Tile {
        let values: Vec<i64> = scored
            .iter()
            .map(|&(tile, own_score)| {
                let child = board
                    .clone_and_play(tile)
                    .expect("finalist tiles are legal moves");
                if child.is_done() {
                    return SHAPE_WIN + own_score;
                }

                let opponent_best = candidate_tiles(&child, self.config.candidate_ring)
                    .into_iter()
                    .map(|reply| position_score(&child, reply, me.other()))
                    .max()
                    .unwrap_or(0);

                own_score - opponent_best
            })
            .collect();

        let best = *values.iter().max().expect("finalists are nonempty");
        let ties: Vec<Tile> = scored
            .iter()
            .zip(&values)
            .filter(|(_, &v)| v == best)
            .map(|(&(tile, _), _)| tile)
            .collect();

        *ties.choose(&mut self.rng).expect("at least one best finalist")
    }
}

impl<R: Rng> Bot<OmokBoard> for OmokBot<R> {
    fn select_move(&mut self, board: &OmokBoard) -> Result<Tile, BoardDone> {
        board.check_done()?;
        let me = board.next_player();

        let candidates = candidate_tiles(board, self.config.candidate_ring);
        debug_assert!(!candidates.is_empty());

        // completing five wins outright, stopping the opponent's five comes second
        for color in [me, me.other()] {
            if let Some(&tile) = candidates.iter().find(|&&tile| wins_immediately(board, tile, color)) {
                return Ok(tile);
            }
        }

        let mut scored: Vec<(Tile, i64)> = candidates
            .into_iter()
            .map(|tile| (tile, position_score(board, tile, me)))
            .collect();
        scored.sort_by_key(|&(tile, score)| (Reverse(score), tile));
        scored.truncate(self.config.top_candidates);

        let make_mistake = self.config.mistake_rate > 0.0 && self.rng.gen_bool(self.config.mistake_rate);

        let tile = if self.config.lookahead && !make_mistake {
            self.pick_lookahead(board, &scored, me)
        } else if self.config.weighted_pick || make_mistake {
            self.weighted_pick(&scored)
        } else {
            scored[0].0
        };
        Ok(tile)
    }
}

/// Empty tiles within `ring` king moves of any stone; the center tile on an empty board.
/// With at least one stone and one empty tile on the board this is never empty: the stone
/// area always borders an empty tile.
fn candidate_tiles(board: &OmokBoard, ring: u8) -> Vec<Tile> {
    let size = board.size();

    if board.stones_placed() == 0 {
        return vec![Tile::center(size)];
    }

    let ring = ring as i16;
    let mut near = vec![false; size as usize * size as usize];
    for tile in Tile::all(size) {
        if board.stone_at(tile).is_none() {
            continue;
        }
        for dy in -ring..=ring {
            for dx in -ring..=ring {
                if let Some(adj) = tile.offset(dx, dy, size) {
                    if board.stone_at(adj).is_none() {
                        near[adj.index(size)] = true;
                    }
                }
            }
        }
    }

    Tile::all(size).filter(|tile| near[tile.index(size)]).collect()
}

/// Whether placing `color` on `tile` completes a run of five or more.
fn wins_immediately(board: &OmokBoard, tile: Tile, color: Player) -> bool {
    LINE_DIRECTIONS
        .iter()
        .any(|&(dx, dy)| line_through(board, tile, color, dx, dy).0 >= OmokBoard::WIN_RUN)
}

/// Positional value of placing `color` on `tile`: the summed shape values of the four
/// lines through the tile plus a small center bonus.
fn position_score(board: &OmokBoard, tile: Tile, color: Player) -> i64 {
    let shapes: i64 = LINE_DIRECTIONS
        .iter()
        .map(|&(dx, dy)| {
            let (run, open_ends) = line_through(board, tile, color, dx, dy);
            shape_value(run, open_ends)
        })
        .sum();

    let center = Tile::center(board.size());
    let center_bonus = (board.size() / 2) as i64 - tile.chebyshev_distance(center) as i64;

    shapes + center_bonus
}

/// The run that would exist through `tile` along `(dx, dy)` if `color` played there,
/// and how many of its two extension ends are empty.
fn line_through(board: &OmokBoard, tile: Tile, color: Player, dx: i16, dy: i16) -> (u16, u8) {
    let mut run = 1;
    let mut open_ends = 0;

    for (sx, sy) in [(dx, dy), (-dx, -dy)] {
        let mut curr = tile;
        loop {
            match curr.offset(sx, sy, board.size()) {
                Some(next) if board.stone_at(next) == Some(color) => {
                    run += 1;
                    curr = next;
                }
                Some(next) if board.stone_at(next).is_none() => {
                    open_ends += 1;
                    break;
                }
                _ => break,
            }
        }
    }

    (run, open_ends)
}
