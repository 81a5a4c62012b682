use std::time::Duration;

/// Maximum number of check-ins kept in the local history
pub(crate) const HISTORY_LIMIT: usize = 5;

/// Storage key holding the serialized history list
pub(crate) const HISTORY_KEY: &str = "checkin_log";

/// Marker left in an undeployed webhook URL
pub(crate) const WEBHOOK_PLACEHOLDER: &str = "YOUR_DEPLOYMENT_ID";

/// Time spent on the success panel before returning to the form
pub(crate) const RESET_DELAY: Duration = Duration::from_secs(10);

/// Time spent on the error panel before returning to the form
pub(crate) const ERROR_RESET_DELAY: Duration = Duration::from_secs(3);

/// Shown when the generation API answers without any text
pub(crate) const EMPTY_REPLY_MESSAGE: &str = "歡迎來到未來課堂！";

/// Shown when the generation API cannot be reached or is not configured
pub(crate) const FALLBACK_MESSAGE: &str = "打卡成功！祝你有個充實的一天。";

/// Generic text for the error panel
pub(crate) const GENERIC_ERROR_MESSAGE: &str = "發生錯誤，請稍後再試。";

/// Timestamp layout matching a 24-hour zh-TW locale rendering: "2026/1/5 09:03:05"
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y/%-m/%-d %H:%M:%S";

pub(crate) const DEFAULT_ADMIN_EMAIL: &str = "xinyiliu@ntnu.edu.tw";
pub(crate) const DEFAULT_CONTACT_EMAIL: &str = "clc@ntnu.edu.tw";
pub(crate) const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub(crate) const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub(crate) const DEFAULT_WEBHOOK_URL: &str =
    "https://script.google.com/macros/s/YOUR_DEPLOYMENT_ID/exec";

/// Environment variables consulted (in order) for the generation API key
pub(crate) const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];
