//! Form state and its transitions
//!
//! Every transition is a plain method on [`CheckInState`]; nothing here
//! touches the network, the store, or the clock.

use std::time::Instant;

use super::types::{CheckInRecord, HistoryList, UiStatus};

#[derive(Debug, Default)]
pub(crate) struct CheckInState {
    status: UiStatus,
    email_input: String,
    history: HistoryList,
    message: Option<String>,
    error: Option<String>,
    reset_at: Option<Instant>,
}

impl CheckInState {
    pub(crate) fn new(history: HistoryList) -> Self {
        Self {
            history,
            ..Self::default()
        }
    }

    pub(crate) fn status(&self) -> UiStatus {
        self.status
    }

    pub(crate) fn email_input(&self) -> &str {
        &self.email_input
    }

    pub(crate) fn history(&self) -> &HistoryList {
        &self.history
    }

    pub(crate) fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn reset_deadline(&self) -> Option<Instant> {
        self.reset_at
    }

    pub(crate) fn set_email_input(&mut self, email: &str) {
        self.email_input = email.to_string();
    }

    /// Enter Submitting. Any reset left over from a previous submission is dropped.
    pub(crate) fn begin_submit(&mut self) {
        self.status = UiStatus::Submitting;
        self.message = None;
        self.error = None;
        self.reset_at = None;
    }

    /// History as it will look once `record` is accepted
    pub(crate) fn history_with(&self, record: CheckInRecord) -> HistoryList {
        let mut history = self.history.clone();
        history.push(record);
        history
    }

    pub(crate) fn complete(&mut self, history: HistoryList, message: String, reset_at: Instant) {
        self.history = history;
        self.status = UiStatus::Success;
        self.email_input.clear();
        self.message = Some(message);
        self.reset_at = Some(reset_at);
    }

    pub(crate) fn fail(&mut self, error: &str, reset_at: Instant) {
        self.status = UiStatus::Error;
        self.error = Some(error.to_string());
        self.reset_at = Some(reset_at);
    }

    /// Apply a due reset. Returns true when the form went back to Idle.
    pub(crate) fn poll_reset(&mut self, now: Instant) -> bool {
        match self.reset_at {
            Some(deadline) if now >= deadline => {
                self.dismiss();
                true
            }
            _ => false,
        }
    }

    /// Return to the form immediately
    pub(crate) fn dismiss(&mut self) {
        self.status = UiStatus::Idle;
        self.message = None;
        self.error = None;
        self.reset_at = None;
    }
}
