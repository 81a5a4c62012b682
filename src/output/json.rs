use serde_json::json;

use crate::core::{CheckInState, HistoryList, SubmitOutcome};

fn to_pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "{}".to_string()
    })
}

/// Result of one submission together with the form state it produced
pub(crate) fn output_submit_json(outcome: &SubmitOutcome, state: &CheckInState) -> String {
    let value = match outcome {
        SubmitOutcome::Success { record, message } => json!({
            "status": state.status(),
            "record": record,
            "message": state.message().unwrap_or(message),
            "history": state.history(),
        }),
        SubmitOutcome::Failed { message } => json!({
            "status": state.status(),
            "error": state.error().unwrap_or(message),
            "history": state.history(),
        }),
    };
    to_pretty(&value)
}

pub(crate) fn output_validation_json(message: &str) -> String {
    to_pretty(&json!({ "status": "invalid", "error": message }))
}

pub(crate) fn output_history_json(history: &HistoryList) -> String {
    to_pretty(&json!(history))
}
