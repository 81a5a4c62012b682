//! Best-effort check-in notifications

mod webhook;

pub(crate) use webhook::{WebhookNotifier, is_configured};

use crate::core::CheckInRecord;
use crate::error::NotifyError;

/// Delivers a record at most once. The caller may ignore the result.
pub(crate) trait Notifier: Send + Sync {
    fn notify(&self, record: &CheckInRecord) -> Result<(), NotifyError>;
}
