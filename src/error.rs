//! Error taxonomy for the three external collaborators.
//!
//! Each collaborator reports its own error type so the orchestrator can apply
//! a different policy per failure: lookup errors end the search, storage errors
//! are reported but do not undo the notification, notification errors are only
//! logged.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the creature-data API
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("query cannot be empty")]
    EmptyQuery,

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Failure reading or writing search history
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create history directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open history database {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("history database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("failed to serialize search payload: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("stored timestamp {0} is out of range")]
    InvalidTimestamp(i64),
}

/// Failure talking to the chat service. Never fatal.
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("no chat access token configured")]
    MissingToken,

    #[error("chat room has not been provisioned")]
    RoomNotProvisioned,

    #[error("request to chat service {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected response from chat service {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("chat service {endpoint} returned HTTP {status}: {body}")]
    Status { endpoint: String, status: StatusCode, body: String },
}
