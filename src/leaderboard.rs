/// The persisted high-score table.
///
/// Serialised as a bare JSON array of `{name, score}` objects.  The size
/// bound is whatever capacity the caller passes in, normally
/// `GameConfig::leaderboard_capacity`.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

/// Best scores, highest first, never longer than its capacity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Leaderboard::new()
    }
}

impl Leaderboard {
    pub fn new() -> Self {
        Leaderboard { entries: Vec::new() }
    }

    /// Build from persisted entries, restoring the ordering in case the
    /// record was edited by hand.  Call `limit` to apply a size bound.
    pub fn from_entries(mut entries: Vec<LeaderboardEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        Leaderboard { entries }
    }

    /// Keep only the best `capacity` entries.
    pub fn limit(&mut self, capacity: usize) {
        self.entries.truncate(capacity);
    }

    /// Insert a result, re-sort descending and drop whatever falls off the
    /// end.  Ties keep their insertion order, so an older score stays ahead
    /// of a newer equal one.
    pub fn submit(&mut self, name: &str, score: u32, capacity: usize) {
        self.entries.push(LeaderboardEntry {
            name: name.to_string(),
            score,
        });
        self.normalize(capacity);
    }

    fn normalize(&mut self, capacity: usize) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.limit(capacity);
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}
