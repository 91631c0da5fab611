//! The recent-distinct read pipeline over an in-memory entry log.
//!
//! Stages: sort by timestamp descending, keep the first entry of each query,
//! truncate to [`RECENT_LIMIT`].

use std::collections::HashSet;

use crate::models::SearchEntry;

/// Maximum number of entries a history read returns
pub const RECENT_LIMIT: usize = 5;

/// Apply the read pipeline to `entries`, given in write order (oldest write first).
pub fn recent_distinct(entries: &[SearchEntry]) -> Vec<SearchEntry> {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    // Ties on timestamp: later write wins
    order.sort_by(|&a, &b| entries[b].timestamp.cmp(&entries[a].timestamp).then(b.cmp(&a)));

    let mut seen = HashSet::new();
    order
        .into_iter()
        .map(|i| &entries[i])
        .filter(|e| seen.insert(e.query.as_str()))
        .take(RECENT_LIMIT)
        .cloned()
        .collect()
}
