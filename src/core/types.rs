//! Core data types for the check-in workflow
//!
//! A check-in record is created once per accepted submission and never
//! changes afterwards; the history only grows at the front and is trimmed
//! at the back.

use serde::{Deserialize, Serialize};

use crate::consts::HISTORY_LIMIT;

/// One accepted check-in, exactly as sent to the webhook and persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct CheckInRecord {
    pub(crate) email: String,
    /// Locale-formatted time of the submission
    pub(crate) timestamp: String,
    /// Unix milliseconds at creation, as a decimal string
    pub(crate) id: String,
}

/// Which panel the form is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum UiStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Most recent check-ins, newest first, never longer than [`HISTORY_LIMIT`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct HistoryList(Vec<CheckInRecord>);

impl HistoryList {
    /// Build from stored records, keeping only the newest entries
    pub(crate) fn from_records(mut records: Vec<CheckInRecord>) -> Self {
        records.truncate(HISTORY_LIMIT);
        Self(records)
    }

    /// Insert at the front and drop the oldest entry once over the limit
    pub(crate) fn push(&mut self, record: CheckInRecord) {
        self.0.insert(0, record);
        self.0.truncate(HISTORY_LIMIT);
    }

    pub(crate) fn records(&self) -> &[CheckInRecord] {
        &self.0
    }

    pub(crate) fn newest(&self) -> Option<&CheckInRecord> {
        self.0.first()
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
