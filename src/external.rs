//! Contracts for the collaborators the planner backend provides.
//!
//! The game core never talks to the network itself: identity, score persistence and
//! speech synthesis are owned by the hosting application and injected as explicit
//! objects. The traits here pin down exactly what the core relies on, and
//! [MemoryScoreStore] is the reference implementation of the score contract (and the
//! test double).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::Difficulty;

/// Key of a mini-game in the score store.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKey {
    Baduk,
    Omok,
}

impl GameKey {
    pub fn as_str(self) -> &'static str {
        match self {
            GameKey::Baduk => "baduk",
            GameKey::Omok => "omok",
        }
    }
}

/// Stable identifier of a signed-in user.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// The signed-in user and the nickname shown on the ranking screens.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Identity {
    pub user: UserId,
    pub nickname: String,
}

/// Who is currently signed in.
pub trait IdentityProvider {
    /// `None` means nobody is signed in. For the game core that only means "cannot save
    /// a score"; it is never a gameplay failure.
    fn current_identity(&self) -> Option<Identity>;
}

/// A candidate best-score row, the unit the store contract speaks in.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub user: UserId,
    pub game: GameKey,
    pub level: Difficulty,
    pub score: u32,
}

/// What the store did with a submitted record.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    /// The stored best was created or replaced; `previous` is the score it replaced.
    Updated { previous: Option<u32> },
    /// The stored best is strictly higher, nothing changed.
    NotImproved { best: u32 },
}

/// A failed store call. Best effort: the caller surfaces it and may simply retry.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum StoreError {
    #[error("score store unavailable: {0}")]
    Unavailable(String),
}

/// The best-score upsert contract.
///
/// At most one record exists per `(user, game, level)` triple. A write is accepted only
/// when the new score is greater than or equal to the stored best; an equal score still
/// refreshes the recency marker, so the most recent of tied runs ranks first.
pub trait ScoreStore {
    fn upsert_best(&mut self, record: &ScoreRecord) -> Result<UpsertOutcome, StoreError>;

    fn best_for(&self, user: &UserId, game: GameKey, level: Difficulty) -> Result<Option<u32>, StoreError>;
}

/// Fire-and-forget text to speech, used by the dictation mini-game.
/// Speaking is asynchronous and the core never awaits completion.
pub trait Speech {
    /// `rate` is the playback speed multiplier, 1.0 being normal speech.
    fn speak(&self, text: &str, rate: f32);
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct StoredBest {
    score: u32,
    saved_at: u64,
}

/// In-memory [ScoreStore], keyed by the `(user, game, level)` triple with a logical clock
/// as the recency marker.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    rows: HashMap<(UserId, GameKey, Difficulty), StoredBest>,
    clock: u64,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The logical time the best for this triple was last written, for recency
    /// tie-breaking in ranking queries.
    pub fn saved_at(&self, user: &UserId, game: GameKey, level: Difficulty) -> Option<u64> {
        self.rows
            .get(&(user.clone(), game, level))
            .map(|stored| stored.saved_at)
    }
}

impl ScoreStore for MemoryScoreStore {
    fn upsert_best(&mut self, record: &ScoreRecord) -> Result<UpsertOutcome, StoreError> {
        self.clock += 1;
        let key = (record.user.clone(), record.game, record.level);

        let outcome = match self.rows.get_mut(&key) {
            Some(stored) if record.score < stored.score => UpsertOutcome::NotImproved { best: stored.score },
            Some(stored) => {
                let previous = stored.score;
                stored.score = record.score;
                stored.saved_at = self.clock;
                UpsertOutcome::Updated {
                    previous: Some(previous),
                }
            }
            None => {
                self.rows.insert(
                    key,
                    StoredBest {
                        score: record.score,
                        saved_at: self.clock,
                    },
                );
                UpsertOutcome::Updated { previous: None }
            }
        };

        Ok(outcome)
    }

    fn best_for(&self, user: &UserId, game: GameKey, level: Difficulty) -> Result<Option<u32>, StoreError> {
        Ok(self
            .rows
            .get(&(user.clone(), game, level))
            .map(|stored| stored.score))
    }
}
