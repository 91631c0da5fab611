use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One recorded lookup. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub query: String,
    pub timestamp: DateTime<Utc>,
    pub payload: Value,
}
