use std::time::Duration;

use super::Notifier;
use crate::consts::WEBHOOK_PLACEHOLDER;
use crate::core::CheckInRecord;
use crate::error::NotifyError;

const NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// True when `url` points at a deployed webhook rather than the template value
pub(crate) fn is_configured(url: &str) -> bool {
    let url = url.trim();
    !url.is_empty() && !url.contains(WEBHOOK_PLACEHOLDER)
}

/// Posts check-ins to the spreadsheet webhook without looking at the reply
pub(crate) struct WebhookNotifier {
    url: String,
    agent: ureq::Agent,
}

impl WebhookNotifier {
    /// `None` when the URL is empty or still the placeholder
    pub(crate) fn from_url(url: &str) -> Option<Self> {
        if !is_configured(url) {
            return None;
        }
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(NOTIFY_TIMEOUT))
            .http_status_as_error(false)
            .build()
            .into();
        Some(Self {
            url: url.trim().to_string(),
            agent,
        })
    }
}

impl Notifier for WebhookNotifier {
    fn notify(&self, record: &CheckInRecord) -> Result<(), NotifyError> {
        // The reply is opaque: status and body are dropped unread.
        self.agent
            .post(&self.url)
            .header("Content-Type", "application/json")
            .send_json(record)
            .map(drop)
            .map_err(|e| NotifyError::Transport(e.to_string()))
    }
}
