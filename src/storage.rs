/// Persistence of the high score and the leaderboard.
///
/// Records are keyed (`highScore`, `leaderboard`).  A record that does not
/// exist yet, or is empty, loads as zero / an empty board.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::debug;

use crate::error::StorageError;
use crate::leaderboard::{Leaderboard, LeaderboardEntry};

pub const HIGH_SCORE_KEY: &str = "highScore";
pub const LEADERBOARD_KEY: &str = "leaderboard";

pub trait ScoreStore {
    fn load_high_score(&self) -> Result<u32, StorageError>;
    fn save_high_score(&mut self, score: u32) -> Result<(), StorageError>;
    fn load_leaderboard(&self) -> Result<Leaderboard, StorageError>;
    fn save_leaderboard(&mut self, board: &Leaderboard) -> Result<(), StorageError>;
}

// ── JSON files on disk ───────────────────────────────────────────────────────

/// One `<key>.json` file per record inside `dir`.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Raw record contents, `None` when missing or blank.
    fn read_record(&self, key: &'static str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.record_path(key)) {
            Ok(text) if text.trim().is_empty() => Ok(None),
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { key, source }),
        }
    }

    fn write_record(&self, key: &'static str, text: String) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io { key, source })?;
        let path = self.record_path(key);
        fs::write(&path, text).map_err(|source| StorageError::Io { key, source })?;
        debug!("Wrote {} record to {}", key, path.display());
        Ok(())
    }
}

impl ScoreStore for FileStore {
    fn load_high_score(&self) -> Result<u32, StorageError> {
        match self.read_record(HIGH_SCORE_KEY)? {
            Some(text) => serde_json::from_str(text.trim()).map_err(|source| StorageError::Json {
                key: HIGH_SCORE_KEY,
                source,
            }),
            None => Ok(0),
        }
    }

    fn save_high_score(&mut self, score: u32) -> Result<(), StorageError> {
        self.write_record(HIGH_SCORE_KEY, score.to_string())
    }

    fn load_leaderboard(&self) -> Result<Leaderboard, StorageError> {
        match self.read_record(LEADERBOARD_KEY)? {
            Some(text) => {
                let entries: Vec<LeaderboardEntry> =
                    serde_json::from_str(&text).map_err(|source| StorageError::Json {
                        key: LEADERBOARD_KEY,
                        source,
                    })?;
                Ok(Leaderboard::from_entries(entries))
            }
            None => Ok(Leaderboard::new()),
        }
    }

    fn save_leaderboard(&mut self, board: &Leaderboard) -> Result<(), StorageError> {
        let text = serde_json::to_string_pretty(board).map_err(|source| StorageError::Json {
            key: LEADERBOARD_KEY,
            source,
        })?;
        self.write_record(LEADERBOARD_KEY, text)
    }
}

// ── In memory ────────────────────────────────────────────────────────────────

/// Keeps records for the lifetime of the process only.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    pub high_score: u32,
    pub leaderboard: Leaderboard,
    /// Number of successful saves, across both records.
    pub writes: u32,
}

impl ScoreStore for MemoryStore {
    fn load_high_score(&self) -> Result<u32, StorageError> {
        Ok(self.high_score)
    }

    fn save_high_score(&mut self, score: u32) -> Result<(), StorageError> {
        self.high_score = score;
        self.writes += 1;
        Ok(())
    }

    fn load_leaderboard(&self) -> Result<Leaderboard, StorageError> {
        Ok(self.leaderboard.clone())
    }

    fn save_leaderboard(&mut self, board: &Leaderboard) -> Result<(), StorageError> {
        self.leaderboard = board.clone();
        self.writes += 1;
        Ok(())
    }
}
