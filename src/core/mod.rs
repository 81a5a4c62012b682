//! Core module - check-in records, form state, and the submission workflow

mod ids;
mod state;
mod types;
mod validation;
mod workflow;

pub(crate) use state::CheckInState;
pub(crate) use types::{CheckInRecord, HistoryList};
#[cfg(test)]
pub(crate) use types::UiStatus;
pub(crate) use workflow::{ResetDelays, SubmitOutcome, Workflow};
