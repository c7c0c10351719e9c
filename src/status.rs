use std::time::Duration;

/// How long a status message stays visible.
pub const HIDE_AFTER: Duration = Duration::from_secs(5);

// Timers may fire slightly before the wall clock reaches the deadline; a
// message this close to its deadline already counts as hidden.
const TIMER_SLACK_MS: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// CSS class of the message area.
    pub fn class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Error }
    }
}

/// The single message slot. Each message carries its own hide deadline, so a
/// timer left over from an older message can never hide a newer one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusBar {
    current: Option<(StatusMessage, f64)>,
}

impl StatusBar {
    /// Replaces whatever is showing. `now_ms` is wall-clock milliseconds.
    pub fn show(message: StatusMessage, now_ms: f64) -> Self {
        let hide_at = now_ms + HIDE_AFTER.as_millis() as f64;
        Self { current: Some((message, hide_at)) }
    }

    pub fn visible_at(&self, now_ms: f64) -> Option<&StatusMessage> {
        match &self.current {
            Some((message, hide_at)) if now_ms < *hide_at - TIMER_SLACK_MS => Some(message),
            _ => None,
        }
    }

    pub fn hide_at(&self) -> Option<f64> {
        self.current.as_ref().map(|(_, at)| *at)
    }

    /// Milliseconds from `now_ms` until the message must be gone.
    pub fn ms_until_hidden(&self, now_ms: f64) -> Option<u32> {
        self.hide_at().map(|at| (at - now_ms).max(0.0) as u32)
    }
}
