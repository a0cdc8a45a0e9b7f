// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// How long a toast stays fully visible.
pub const DISPLAY_DURATION: Duration = Duration::from_secs(3);

/// Length of the exit transition that follows the display time.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (green accent).
    #[default]
    Info,
    /// Something went wrong (red accent).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the glyph shown in front of the message.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Info => "✔",
            Severity::Error => "⚠",
        }
    }
}

/// Where a toast is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Fully visible.
    Showing,
    /// Playing the exit transition; `progress` goes from 0.0 to 1.0.
    Leaving { progress: f32 },
    /// Done; the toast should be removed.
    Expired,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Severity level (determines color).
    severity: Severity,
    /// The i18n key for the notification message.
    message_key: String,
    /// Optional arguments for message interpolation.
    message_args: Vec<(String, String)>,
    /// When this notification was created.
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    ///
    /// The `message_key` should be a valid i18n key that will be resolved
    /// at render time.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    /// Creates an info notification.
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    /// Creates an error notification.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Overrides the creation time.
    #[must_use]
    pub fn created(mut self, at: Instant) -> Self {
        self.created_at = at;
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the lifetime phase at `now`.
    #[must_use]
    pub fn phase_at(&self, now: Instant) -> Phase {
        let age = now.saturating_duration_since(self.created_at);
        if age < DISPLAY_DURATION {
            return Phase::Showing;
        }

        let leaving = age - DISPLAY_DURATION;
        if leaving >= EXIT_DURATION {
            Phase::Expired
        } else {
            Phase::Leaving {
                progress: leaving.as_secs_f32() / EXIT_DURATION.as_secs_f32(),
            }
        }
    }

    /// Returns the current lifetime phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::info("test");
        let n2 = Notification::info("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Info.color(), Severity::Error.color());
    }

    #[test]
    fn notification_builder_pattern_works() {
        let notification = Notification::error("test-error")
            .with_arg("detail", "timeout")
            .with_arg("filename", "a.png");

        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.message_key(), "test-error");
        assert_eq!(notification.message_args().len(), 2);
    }

    #[test]
    fn phase_walks_through_showing_leaving_expired() {
        let start = Instant::now();
        let n = Notification::info("x").created(start);

        assert_eq!(n.phase_at(start), Phase::Showing);
        assert_eq!(
            n.phase_at(start + DISPLAY_DURATION - Duration::from_millis(1)),
            Phase::Showing
        );

        match n.phase_at(start + DISPLAY_DURATION + EXIT_DURATION / 2) {
            Phase::Leaving { progress } => assert!((progress - 0.5).abs() < 0.01),
            other => panic!("expected Leaving, got {other:?}"),
        }

        assert_eq!(
            n.phase_at(start + DISPLAY_DURATION + EXIT_DURATION),
            Phase::Expired
        );
    }

    #[test]
    fn errors_expire_like_info() {
        let start = Instant::now();
        let n = Notification::error("x").created(start);
        assert_eq!(
            n.phase_at(start + DISPLAY_DURATION + EXIT_DURATION),
            Phase::Expired
        );
    }
}
