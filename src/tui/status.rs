//! Transient status bar messages.

use std::time::{Duration, Instant};

/// How long a status message stays up unless replaced.
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(4);

/// Manages temporary status messages with optional auto-clear.
///
/// Messages report the outcome of an action ("Feedback logged", "Theme not
/// saved: ...") and disappear on their own.
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    message: Option<String>,
    set_at: Option<Instant>,
    auto_clear_after: Option<Duration>,
}

impl StatusMessage {
    /// Create a status message manager with auto-clear after duration.
    #[must_use]
    pub const fn with_auto_clear(duration: Duration) -> Self {
        Self {
            message: None,
            set_at: None,
            auto_clear_after: Some(duration),
        }
    }

    /// Set a status message.
    pub fn set(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.set_at = Some(Instant::now());
    }

    /// Clear the status message.
    pub fn clear(&mut self) {
        self.message = None;
        self.set_at = None;
    }

    /// Drop the message once its time is up.
    pub fn expire(&mut self, now: Instant) {
        if let (Some(set_at), Some(duration)) = (self.set_at, self.auto_clear_after) {
            if now.saturating_duration_since(set_at) >= duration {
                self.clear();
            }
        }
    }

    /// Get the current message without checking auto-clear.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
