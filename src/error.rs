use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("請輸入有效的電子郵件")]
    InvalidEmail,

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Failure delivering a check-in to the webhook. Callers are free to drop it.
#[derive(Debug, Error)]
pub(crate) enum NotifyError {
    #[error("webhook request failed: {0}")]
    Transport(String),
}

/// Failure talking to the generation API; never leaves the message client
#[derive(Debug, Error)]
pub(crate) enum GenerateError {
    #[error("no API key configured")]
    MissingCredential,

    #[error("generation request failed: {0}")]
    Http(String),

    #[error("unreadable generation response: {0}")]
    Decode(String),
}
