//! Score submission and the leaderboard boundary
//!
//! The store itself is an external collaborator behind [`ScoreStore`];
//! this module owns validation, record identity and the retry flow. A
//! finished game's score is never lost: a failed write leaves the
//! [`PendingScore`] usable for another attempt with the same record id.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::sim::WeaponKind;

/// How many entries the leaderboard shows
pub const LEADERBOARD_SIZE: usize = 10;

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Caller-generated id; retries reuse it so stores can deduplicate
    pub id: Uuid,
    /// Trimmed, non-empty player name
    pub name: String,
    pub score: u64,
    /// Weapon label, or "unknown" for the fallback weapon
    pub weapon: String,
    /// Assigned by the store on append; `None` until stored
    pub timestamp: Option<u64>,
}

/// Failures at the score boundary
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Rejected locally before any store call
    #[error("player name is required")]
    PlayerNameRequired,
    /// The store write or query failed; the caller may retry
    #[error("score store error: {0}")]
    Store(String),
}

/// Append-only score store contract
pub trait ScoreStore {
    /// Append a record. Must be idempotent per record id: appending the
    /// same id twice stores it once.
    fn append(&mut self, record: &ScoreRecord) -> Result<(), ScoreError>;

    /// Top `n` records ordered by score descending
    fn top_n(&self, n: usize) -> Result<Vec<ScoreRecord>, ScoreError>;
}

/// A finished game's score, held locally until a store accepts it.
///
/// Name validation happens at construction, before any store is involved.
/// The record id is generated exactly once, so retrying after a failed
/// [`submit`](PendingScore::submit) cannot duplicate the entry.
#[derive(Debug, Clone)]
pub struct PendingScore {
    record: ScoreRecord,
}

impl PendingScore {
    pub fn new(name: &str, score: u64, weapon: WeaponKind) -> Result<Self, ScoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScoreError::PlayerNameRequired);
        }
        Ok(Self {
            record: ScoreRecord {
                id: Uuid::new_v4(),
                name: name.to_string(),
                score,
                weapon: weapon.label().to_string(),
                timestamp: None,
            },
        })
    }

    pub fn record(&self) -> &ScoreRecord {
        &self.record
    }

    /// Try to write the score. On failure the pending score stays usable
    /// for another attempt; it is never silently dropped.
    pub fn submit(&self, store: &mut dyn ScoreStore) -> Result<(), ScoreError> {
        match store.append(&self.record) {
            Ok(()) => {
                log::info!(
                    "score {} saved for {} ({})",
                    self.record.score,
                    self.record.name,
                    self.record.weapon
                );
                Ok(())
            }
            Err(err) => {
                log::warn!("score submission failed, keeping it for retry: {err}");
                Err(err)
            }
        }
    }
}

/// In-memory store used by tests and the demo binary.
///
/// Timestamps are a logical counter here; a real backend assigns server
/// time on write.
#[derive(Debug, Default)]
pub struct InMemoryScoreStore {
    records: Vec<ScoreRecord>,
    clock: u64,
}

impl InMemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn append(&mut self, record: &ScoreRecord) -> Result<(), ScoreError> {
        // Idempotent per id: a retried write is a no-op
        if self.records.iter().any(|r| r.id == record.id) {
            return Ok(());
        }
        self.clock += 1;
        let mut stored = record.clone();
        stored.timestamp = Some(self.clock);
        self.records.push(stored);
        Ok(())
    }

    fn top_n(&self, n: usize) -> Result<Vec<ScoreRecord>, ScoreError> {
        let mut sorted = self.records.clone();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted.truncate(n);
        Ok(sorted)
    }
}
