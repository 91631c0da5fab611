use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{HistoryStore, pipeline};
use crate::error::StorageError;
use crate::models::SearchEntry;

/// History kept in process memory. Lost at exit.
#[derive(Debug, Default, Clone)]
pub struct MemoryHistoryStore {
    entries: Vec<SearchEntry>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry with an explicit timestamp
    pub fn record_at(&mut self, query: &str, payload: &Value, timestamp: DateTime<Utc>) {
        self.entries.push(SearchEntry {
            query: query.to_string(),
            timestamp,
            payload: payload.clone(),
        });
    }

    /// Every entry in write order
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn record(&mut self, query: &str, payload: &Value) -> Result<(), StorageError> {
        self.record_at(query, payload, Utc::now());
        Ok(())
    }

    fn recent_distinct(&self) -> Result<Vec<SearchEntry>, StorageError> {
        Ok(pipeline::recent_distinct(&self.entries))
    }
}
