//! Errors from the persistence layer.
//!
//! The simulation itself never fails; only reading and writing the high
//! score and leaderboard records can.

use std::io;

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("IO error on {key} record: {source}")]
    Io {
        key: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Malformed {key} record: {source}")]
    Json {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
