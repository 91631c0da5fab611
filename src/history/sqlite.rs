//! SQLite-backed history.
//!
//! One table, `searches`, holds a document per lookup: the query as typed,
//! the write time in milliseconds since the epoch and the payload as JSON
//! text. The recent-distinct read runs entirely in SQL.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};
use serde_json::Value;
use tracing::debug;

use super::{HistoryStore, RECENT_LIMIT};
use crate::error::StorageError;
use crate::models::SearchEntry;

/// Sort desc by timestamp, keep the newest row per query, limit.
/// `id DESC` breaks timestamp ties in favor of the latest write.
const RECENT_DISTINCT_SQL: &str = "
    SELECT query, timestamp, data FROM (
        SELECT id, query, timestamp, data,
               ROW_NUMBER() OVER (PARTITION BY query ORDER BY timestamp DESC, id DESC) AS rn
        FROM searches
    )
    WHERE rn = 1
    ORDER BY timestamp DESC, id DESC
    LIMIT ?1";

#[derive(Debug)]
pub struct SqliteHistoryStore {
    conn: Connection,
}

impl SqliteHistoryStore {
    /// Open (creating if needed) the database file at `path`
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|source| StorageError::CreateDir { path: parent.to_path_buf(), source })?;
        }

        let conn = Connection::open(path)
            .map_err(|source| StorageError::Open { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), "opened history database");
        Self::with_connection(conn)
    }

    /// Database that lives only as long as this store
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StorageError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS searches (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp INTEGER NOT NULL,
                query TEXT NOT NULL,
                data TEXT NOT NULL
            )",
            [],
        )?;
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_searches_timestamp ON searches(timestamp DESC)",
            [],
        )?;
        Ok(())
    }

    /// Append an entry with an explicit timestamp (millisecond precision)
    pub fn record_at(
        &mut self,
        query: &str,
        payload: &Value,
        timestamp: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let data = serde_json::to_string(payload)?;
        self.conn.execute(
            "INSERT INTO searches (timestamp, query, data) VALUES (?1, ?2, ?3)",
            params![timestamp.timestamp_millis(), query, data],
        )?;
        debug!(query, "recorded search");
        Ok(())
    }

    /// Total number of stored entries, duplicates included
    pub fn len(&self) -> Result<usize, StorageError> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM searches", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}

impl HistoryStore for SqliteHistoryStore {
    fn record(&mut self, query: &str, payload: &Value) -> Result<(), StorageError> {
        self.record_at(query, payload, Utc::now())
    }

    fn recent_distinct(&self) -> Result<Vec<SearchEntry>, StorageError> {
        let mut stmt = self.conn.prepare(RECENT_DISTINCT_SQL)?;
        let rows = stmt
            .query_map(params![RECENT_LIMIT as i64], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?, row.get::<_, String>(2)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(query, millis, data)| -> Result<SearchEntry, StorageError> {
                let timestamp = DateTime::from_timestamp_millis(millis)
                    .ok_or(StorageError::InvalidTimestamp(millis))?;
                let payload = serde_json::from_str(&data)?;
                Ok(SearchEntry { query, timestamp, payload })
            })
            .collect()
    }
}
