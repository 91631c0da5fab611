//! Search history persistence.
//!
//! Every lookup is appended as a [`SearchEntry`]; reads return the most
//! recently searched *distinct* queries, newest first.
//!
//! # Ordering
//!
//! Entries are ordered by timestamp descending. Entries sharing the exact same
//! timestamp are ordered by write order, most recent write first. The rule is
//! total, so two reads over unchanged data always agree.

pub mod memory;
pub mod pipeline;
pub mod sqlite;

pub use memory::MemoryHistoryStore;
pub use pipeline::{RECENT_LIMIT, recent_distinct};
pub use sqlite::SqliteHistoryStore;

use serde_json::Value;

use crate::error::StorageError;
use crate::models::SearchEntry;

pub trait HistoryStore {
    /// Append an entry for `query`, stamped with the current time
    fn record(&mut self, query: &str, payload: &Value) -> Result<(), StorageError>;

    /// Up to [`RECENT_LIMIT`] entries, one per distinct query, newest first
    fn recent_distinct(&self) -> Result<Vec<SearchEntry>, StorageError>;
}
