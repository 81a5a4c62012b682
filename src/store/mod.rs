//! Local history persistence
//!
//! The history is a single serialized value under a fixed key, the same shape
//! a browser's local storage would hold.

mod memory;
mod sqlite;

pub(crate) use memory::MemoryHistoryStore;
pub(crate) use sqlite::SqliteHistoryStore;

use std::path::PathBuf;

use crate::core::HistoryList;
use crate::error::AppError;

pub(crate) trait HistoryStore {
    /// Read the stored history. Missing or unreadable data yields an empty list.
    fn load(&self) -> HistoryList;

    /// Persist the newest entries of `history`
    fn save(&self, history: &HistoryList) -> Result<(), AppError>;
}

/// Default database location: ~/.local/share/checkin/checkin.db
pub(crate) fn default_store_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(
        home.join(".local")
            .join("share")
            .join("checkin")
            .join("checkin.db"),
    )
}

/// Parse a stored history value, logging and discarding anything malformed
pub(crate) fn decode_history(raw: &str) -> HistoryList {
    match serde_json::from_str::<HistoryList>(raw) {
        Ok(history) => HistoryList::from_records(history.records().to_vec()),
        Err(e) => {
            tracing::warn!(error = %e, "stored history is unreadable, starting empty");
            HistoryList::default()
        }
    }
}
