use chrono::{DateTime, Utc};

/// Issues time-derived record ids that never repeat or go backwards
#[derive(Debug, Default)]
pub(crate) struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Continue after an id already handed out, e.g. the newest stored record
    pub(crate) fn after(last_id: Option<&str>) -> Self {
        let last = last_id.and_then(|id| id.parse::<i64>().ok()).unwrap_or(0);
        Self { last }
    }

    pub(crate) fn next_id(&mut self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis();
        self.last = if millis > self.last {
            millis
        } else {
            self.last.saturating_add(1)
        };
        self.last.to_string()
    }
}
