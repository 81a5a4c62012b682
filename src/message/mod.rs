//! Welcome message generation

mod gemini;
mod prompt;

pub(crate) use gemini::GeminiClient;

use crate::consts::FALLBACK_MESSAGE;

/// Produces the text shown on the success panel. Never fails.
pub(crate) trait MessageSource: Send + Sync {
    fn get_message(&self, email: &str) -> String;
}

/// Used with --offline: no network, always the fallback sentence
pub(crate) struct OfflineMessages;

impl MessageSource for OfflineMessages {
    fn get_message(&self, _email: &str) -> String {
        FALLBACK_MESSAGE.to_string()
    }
}
