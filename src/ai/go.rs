//! The difficulty-tiered Go opponent.
use std::fmt::{Debug, Formatter};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::{Bot, Difficulty};
use crate::board::{Board, BoardDone};
use crate::games::go::{GoBoard, Move, Tile};

/// Tuning for one [GoBot] tier. Constructed through [GoAiConfig::for_difficulty],
/// validated in [GoAiConfig::new].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GoAiConfig {
    pub difficulty: Difficulty,
    /// Chance for the medium tier to overlook an available capture and fall back to the
    /// easy policy, so it doesn't play inhumanly sharp.
    pub capture_miss_rate: f64,
}

impl GoAiConfig {
    pub fn new(difficulty: Difficulty, capture_miss_rate: f64) -> GoAiConfig {
        assert!(
            (0.0..=1.0).contains(&capture_miss_rate),
            "capture_miss_rate {} outside [0, 1]",
            capture_miss_rate
        );
        GoAiConfig {
            difficulty,
            capture_miss_rate,
        }
    }

    pub fn for_difficulty(difficulty: Difficulty) -> GoAiConfig {
        let capture_miss_rate = match difficulty {
            Difficulty::Easy => 0.0,
            Difficulty::Medium => 0.3,
            Difficulty::Hard => 0.0,
        };
        GoAiConfig::new(difficulty, capture_miss_rate)
    }
}

// Weights for the hard tier's linear candidate evaluation. The exact values are game
// tuning, the intent is: captures dominate, walking into a strong reply is almost as bad,
// liberties and center proximity are tie-breakers.
const WEIGHT_CAPTURE: i64 = 16;
const WEIGHT_REPLY: i64 = 12;
const WEIGHT_LIBERTY: i64 = 3;
const WEIGHT_CENTER: i64 = 1;

// Capture bonus in the easy tier's random weighting.
const EASY_CAPTURE_BONUS: u32 = 8;

/// A legal placement for the side to move, with the placement already resolved.
struct Candidate {
    tile: Tile,
    captured: u16,
    /// The board after this placement, used for liberty counts and reply lookahead.
    next: GoBoard,
}

/// The house Go opponent. All tiers only ever produce legal moves; when no placement is
/// legal the bot passes.
pub struct GoBot<R: Rng> {
    config: GoAiConfig,
    rng: R,
}

impl<R: Rng> Debug for GoBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "GoBot {{ config: {:?} }}", self.config)
    }
}

impl<R: Rng> GoBot<R> {
    pub fn new(difficulty: Difficulty, rng: R) -> Self {
        Self::with_config(GoAiConfig::for_difficulty(difficulty), rng)
    }

    pub fn with_config(config: GoAiConfig, rng: R) -> Self {
        GoBot { config, rng }
    }

    fn pick_easy(&mut self, board: &GoBoard, candidates: &[Candidate]) -> Tile {
        // weighted towards the center, captures sweeten the pot
        let chosen = candidates
            .choose_weighted(&mut self.rng, |c| {
                center_score(board.size(), c.tile) + c.captured as u32 * EASY_CAPTURE_BONUS
            })
            .expect("candidates are nonempty with positive weights");
        chosen.tile
    }

    fn pick_medium(&mut self, board: &GoBoard, candidates: &[Candidate]) -> Tile {
        let best_capture = candidates.iter().map(|c| c.captured).max().unwrap_or(0);

        if best_capture > 0 && !self.rng.gen_bool(self.config.capture_miss_rate) {
            let capturing: Vec<&Candidate> = candidates.iter().filter(|c| c.captured == best_capture).collect();
            return capturing
                .choose(&mut self.rng)
                .expect("at least one capturing candidate")
                .tile;
        }

        self.pick_easy(board, candidates)
    }

    fn pick_hard(&mut self, board: &GoBoard, candidates: &[Candidate]) -> Tile {
        let values: Vec<i64> = candidates
            .iter()
            .map(|c| {
                let own_liberties = c
                    .next
                    .group_at(c.tile)
                    .map_or(0, |group| group.liberties as i64);
                let reply = best_reply_captures(&c.next) as i64;

                c.captured as i64 * WEIGHT_CAPTURE
                    + own_liberties * WEIGHT_LIBERTY
                    + center_score(board.size(), c.tile) as i64 * WEIGHT_CENTER
                    - reply * WEIGHT_REPLY
            })
            .collect();

        let best = *values.iter().max().expect("candidates are nonempty");
        let ties: Vec<Tile> = candidates
            .iter()
            .zip(&values)
            .filter(|(_, &v)| v == best)
            .map(|(c, _)| c.tile)
            .collect();

        *ties.choose(&mut self.rng).expect("at least one best candidate")
    }
}

impl<R: Rng> Bot<GoBoard> for GoBot<R> {
    fn select_move(&mut self, board: &GoBoard) -> Result<Move, BoardDone> {
        board.check_done()?;

        let candidates = legal_placements(board);
        if candidates.is_empty() {
            return Ok(Move::Pass);
        }

        let tile = match self.config.difficulty {
            Difficulty::Easy => self.pick_easy(board, &candidates),
            Difficulty::Medium => self.pick_medium(board, &candidates),
            Difficulty::Hard => self.pick_hard(board, &candidates),
        };
        Ok(Move::Place(tile))
    }
}

/// Every empty tile where a placement by the side to move would be accepted.
/// Only the bots enumerate this; the human path rejects illegal moves one at a time.
fn legal_placements(board: &GoBoard) -> Vec<Candidate> {
    Tile::all(board.size())
        .filter_map(|tile| {
            board
                .place_and_resolve(tile)
                .ok()
                .map(|(next, captured)| Candidate { tile, captured, next })
        })
        .collect()
}

/// The most stones the side to move on `board` can capture with a single placement.
fn best_reply_captures(board: &GoBoard) -> u16 {
    if board.is_done() {
        return 0;
    }
    Tile::all(board.size())
        .filter_map(|tile| board.place_and_resolve(tile).ok().map(|(_, captured)| captured))
        .max()
        .unwrap_or(0)
}

/// Higher closer to the center, always at least 1.
fn center_score(size: u8, tile: Tile) -> u32 {
    let center = Tile::center(size);
    (size as u32 / 2 + 1) - tile.chebyshev_distance(center) as u32
}
