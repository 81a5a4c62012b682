//! Check-in submission flow
//!
//! Validates the email, builds the record, runs the welcome message request
//! and the webhook notification side by side, then persists the history and
//! moves the form to Success (or Error when persisting fails).

use std::time::{Duration, Instant};

use chrono::Utc;

use super::ids::IdGenerator;
use super::state::CheckInState;
use super::types::CheckInRecord;
use super::validation::validate_email;
use crate::consts::{ERROR_RESET_DELAY, GENERIC_ERROR_MESSAGE, RESET_DELAY};
use crate::error::AppError;
use crate::message::MessageSource;
use crate::notify::Notifier;
use crate::store::HistoryStore;
use crate::utils::Timezone;

#[derive(Debug, Clone, Copy)]
pub(crate) struct ResetDelays {
    pub(crate) success: Duration,
    pub(crate) error: Duration,
}

impl Default for ResetDelays {
    fn default() -> Self {
        Self {
            success: RESET_DELAY,
            error: ERROR_RESET_DELAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SubmitOutcome {
    Success {
        record: CheckInRecord,
        message: String,
    },
    Failed {
        message: String,
    },
}

pub(crate) struct Workflow {
    state: CheckInState,
    ids: IdGenerator,
    timezone: Timezone,
    delays: ResetDelays,
    messages: Box<dyn MessageSource>,
    notifier: Option<Box<dyn Notifier>>,
    store: Box<dyn HistoryStore>,
}

impl Workflow {
    /// Load the stored history and start Idle
    pub(crate) fn new(
        store: Box<dyn HistoryStore>,
        messages: Box<dyn MessageSource>,
        notifier: Option<Box<dyn Notifier>>,
        timezone: Timezone,
        delays: ResetDelays,
    ) -> Self {
        let history = store.load();
        let ids = IdGenerator::after(history.newest().map(|r| r.id.as_str()));
        Self {
            state: CheckInState::new(history),
            ids,
            timezone,
            delays,
            messages,
            notifier,
            store,
        }
    }

    pub(crate) fn state(&self) -> &CheckInState {
        &self.state
    }

    pub(crate) fn delays(&self) -> ResetDelays {
        self.delays
    }

    #[cfg(test)]
    pub(crate) fn has_notifier(&self) -> bool {
        self.notifier.is_some()
    }

    /// Run one submission. `Err` only for invalid input, which leaves the state untouched.
    pub(crate) fn submit(&mut self, input: &str) -> Result<SubmitOutcome, AppError> {
        let email = validate_email(input)?.to_string();

        self.state.set_email_input(&email);
        self.state.begin_submit();

        let now = Utc::now();
        let record = CheckInRecord {
            email: email.clone(),
            timestamp: self.timezone.format_timestamp(now),
            id: self.ids.next_id(now),
        };
        tracing::debug!(id = %record.id, email = %self.state.email_input(), "submitting check-in");

        let messages = &*self.messages;
        let notifier = self.notifier.as_deref();
        let (message, delivery) = rayon::join(
            || messages.get_message(&email),
            || notifier.map(|n| n.notify(&record)),
        );
        match delivery {
            Some(Err(e)) => tracing::warn!(error = %e, id = %record.id, "webhook notification dropped"),
            Some(Ok(())) => tracing::debug!(id = %record.id, "webhook notified"),
            None => tracing::debug!("webhook not configured, skipping notification"),
        }

        let history = self.state.history_with(record.clone());
        match self.store.save(&history) {
            Ok(()) => {
                tracing::debug!(entries = history.len(), "history saved");
                self.state
                    .complete(history, message.clone(), Instant::now() + self.delays.success);
                Ok(SubmitOutcome::Success { record, message })
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to persist check-in history");
                self.state
                    .fail(GENERIC_ERROR_MESSAGE, Instant::now() + self.delays.error);
                Ok(SubmitOutcome::Failed {
                    message: GENERIC_ERROR_MESSAGE.to_string(),
                })
            }
        }
    }

    pub(crate) fn poll_reset(&mut self, now: Instant) -> bool {
        self.state.poll_reset(now)
    }

    /// Block until the pending reset is due, then apply it
    pub(crate) fn wait_for_reset(&mut self) {
        let Some(deadline) = self.state.reset_deadline() else {
            return;
        };
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        self.poll_reset(Instant::now());
    }
}
