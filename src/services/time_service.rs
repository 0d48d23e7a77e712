use chrono::{DateTime, Utc};

#[cfg(test)]
use mockall::automock;

/// Formats a past instant relative to `now` (e.g. "3 minutes ago").
/// `now` is supplied by the caller so the formatter never reads a clock.
#[cfg_attr(test, automock)]
pub trait RelativeTimeFormatter: Send + Sync {
    fn relative(&self, instant: DateTime<Utc>, now: DateTime<Utc>) -> String;
}

#[derive(Clone)]
pub struct HumanTimeFormatter;

impl HumanTimeFormatter {
    pub fn new() -> Self {
        HumanTimeFormatter
    }
}

impl Default for HumanTimeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl RelativeTimeFormatter for HumanTimeFormatter {
    fn relative(&self, instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
        // Instants in the future (clock skew between peers) read as "just now".
        let seconds = now.signed_duration_since(instant).num_seconds().max(0);
        if seconds < 60 {
            return "just now".to_string();
        }

        let minutes = seconds / 60;
        if minutes < 60 {
            return ago(minutes, "minute");
        }

        let hours = minutes / 60;
        if hours < 24 {
            return ago(hours, "hour");
        }

        ago(hours / 24, "day")
    }
}

fn ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
