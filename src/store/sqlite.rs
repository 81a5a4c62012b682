use std::path::Path;

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};

use super::{HistoryStore, decode_history};
use crate::consts::HISTORY_KEY;
use crate::core::HistoryList;
use crate::error::AppError;

/// Key-value table in a single SQLite file, holding the history under [`HISTORY_KEY`]
pub(crate) struct SqliteHistoryStore {
    conn: Connection,
}

impl SqliteHistoryStore {
    pub(crate) fn open(path: &Path) -> Result<Self, AppError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        init_db(&conn)?;
        tracing::debug!(path = %path.display(), "opened history store");
        Ok(Self { conn })
    }

    fn get_item(&self, key: &str) -> rusqlite::Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
    }

    fn set_item(&self, key: &str, value: &str) -> rusqlite::Result<()> {
        let updated_at = Utc::now().to_rfc3339();
        self.conn.execute(
            r#"
INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
ON CONFLICT(key) DO UPDATE SET
  value=excluded.value,
  updated_at=excluded.updated_at
            "#,
            (key, value, updated_at),
        )?;
        Ok(())
    }
}

impl HistoryStore for SqliteHistoryStore {
    fn load(&self) -> HistoryList {
        match self.get_item(HISTORY_KEY) {
            Ok(Some(raw)) => decode_history(&raw),
            Ok(None) => HistoryList::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read history, starting empty");
                HistoryList::default()
            }
        }
    }

    fn save(&self, history: &HistoryList) -> Result<(), AppError> {
        let capped = HistoryList::from_records(history.records().to_vec());
        let raw = serde_json::to_string(&capped)?;
        self.set_item(HISTORY_KEY, &raw)?;
        Ok(())
    }
}

fn init_db(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
CREATE TABLE IF NOT EXISTS kv (
  key TEXT PRIMARY KEY,
  value TEXT NOT NULL,
  updated_at TEXT NOT NULL
);
        "#,
    )
}
