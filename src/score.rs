//! Turning a finished game into a number and pushing it at the score store.
//!
//! The formulas are game tuning, not physics: the constants only have to keep the
//! incentives pointing the right way (winning beats drawing beats losing, and faster or
//! more dominant wins score higher). Persistence policy lives entirely behind the
//! [ScoreStore](crate::external::ScoreStore) contract; this module only computes the
//! candidate number and reports what the store said.

use thiserror::Error;
use tracing::{info, warn};

use crate::ai::Difficulty;
use crate::external::{GameKey, IdentityProvider, ScoreRecord, ScoreStore, StoreError, UpsertOutcome};
use crate::session::SessionOutcome;

#[cfg(feature = "game_go")]
use crate::board::Player;
#[cfg(feature = "game_go")]
use crate::games::go::GoBoard;
#[cfg(feature = "game_omok")]
use crate::games::omok::OmokBoard;

const WIN_BONUS: u32 = 100;
const DRAW_BONUS: u32 = 40;
const LOSS_BONUS: u32 = 10;

#[cfg(feature = "game_go")]
const GO_CAPTURE_POINTS: u32 = 5;

fn outcome_bonus(outcome: SessionOutcome) -> u32 {
    match outcome {
        SessionOutcome::HumanWin => WIN_BONUS,
        SessionOutcome::Draw => DRAW_BONUS,
        SessionOutcome::AiWin => LOSS_BONUS,
    }
}

fn difficulty_bonus(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy => 0,
        Difficulty::Medium => 20,
        Difficulty::Hard => 50,
    }
}

/// Score for a finished Go game: the outcome bonus plus points for every stone the human
/// captured beyond what the bot captured.
#[cfg(feature = "game_go")]
pub fn go_score(board: &GoBoard, human: Player, outcome: SessionOutcome) -> u32 {
    let diff = board.captured_by(human) as i64 - board.captured_by(human.other()) as i64;
    outcome_bonus(outcome) + diff.max(0) as u32 * GO_CAPTURE_POINTS
}

/// Score for a finished Omok game: outcome bonus, difficulty bonus, and on a win a speed
/// bonus that shrinks with every stone on the board.
#[cfg(feature = "game_omok")]
pub fn omok_score(board: &OmokBoard, outcome: SessionOutcome, difficulty: Difficulty) -> u32 {
    let speed = match outcome {
        SessionOutcome::HumanWin => (board.area() - board.stones_placed()) as u32 / 2,
        SessionOutcome::Draw | SessionOutcome::AiWin => 0,
    };

    outcome_bonus(outcome) + difficulty_bonus(difficulty) + speed
}

/// A save that went through: the stored outcome plus the nickname to show in the
/// confirmation toast.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SaveReport {
    pub nickname: String,
    pub outcome: UpsertOutcome,
}

/// Why a score could not be saved. The finished game outcome stays valid either way, and
/// the user can simply retry.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ScoreSaveError {
    #[error("no signed-in user, score not saved")]
    NotSignedIn,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Submit a computed score as the user's new best.
///
/// This runs strictly after outcome finalization, so a failure here can never leave a
/// game session in an inconsistent state.
pub fn save_best_score(
    store: &mut dyn ScoreStore,
    identity: &dyn IdentityProvider,
    game: GameKey,
    level: Difficulty,
    score: u32,
) -> Result<SaveReport, ScoreSaveError> {
    let Some(identity) = identity.current_identity() else {
        warn!(game = game.as_str(), "score not saved, nobody is signed in");
        return Err(ScoreSaveError::NotSignedIn);
    };

    let record = ScoreRecord {
        user: identity.user,
        game,
        level,
        score,
    };

    match store.upsert_best(&record) {
        Ok(outcome) => {
            info!(
                game = game.as_str(),
                level = level.as_str(),
                score,
                ?outcome,
                "score saved"
            );
            Ok(SaveReport {
                nickname: identity.nickname,
                outcome,
            })
        }
        Err(err) => {
            warn!(game = game.as_str(), error = %err, "score save failed");
            Err(err.into())
        }
    }
}
