//! Transient notification banner
//!
//! Single-slot, last-write-wins. Instead of a fire-and-forget timer the
//! message carries its expiry; the renderer compares against the current
//! time, so a newer message is never clipped by an older timer and tests
//! stay deterministic.

use crate::config::NOTIFICATION_TTL_SECS;
use chrono::{DateTime, Duration, Local};

/// A banner message with its expiry instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub expires_at: DateTime<Local>,
}

/// Notification banner state - at most one retained message
#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    /// Replace the banner message; the newest expiry always governs
    pub fn show(&mut self, message: impl Into<String>, now: DateTime<Local>) {
        self.current = Some(Notification {
            message: message.into(),
            expires_at: now + Duration::seconds(NOTIFICATION_TTL_SECS),
        });
    }

    /// The message, if it has not expired at `now`
    pub fn visible(&self, now: DateTime<Local>) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|n| now < n.expires_at)
            .map(|n| n.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_visible_until_its_expiry() {
        let now = Local::now();
        let mut state = NotificationState::default();
        state.show("Task added successfully!", now);

        assert_eq!(state.visible(now), Some("Task added successfully!"));
        assert_eq!(
            state.visible(now + Duration::seconds(NOTIFICATION_TTL_SECS - 1)),
            Some("Task added successfully!")
        );
        assert_eq!(
            state.visible(now + Duration::seconds(NOTIFICATION_TTL_SECS)),
            None
        );
    }

    #[test]
    fn newer_message_wins_and_carries_its_own_expiry() {
        let now = Local::now();
        let mut state = NotificationState::default();
        state.show("first", now);
        state.show("second", now + Duration::seconds(2));

        // Past the first message's expiry, the second is still visible
        let later = now + Duration::seconds(4);
        assert_eq!(state.visible(later), Some("second"));
    }

    #[test]
    fn empty_state_shows_nothing() {
        let state = NotificationState::default();
        assert_eq!(state.visible(Local::now()), None);
    }
}
