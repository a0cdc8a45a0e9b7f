// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and removes expired ones on tick.

use super::notification::{Notification, NotificationId, Phase, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking expiry timers.
    Tick,
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE` notifications are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available. Queued toasts start their timer when shown.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Error => tracing::warn!(
                key = notification.message_key(),
                args = ?notification.message_args(),
                "error notification"
            ),
            Severity::Info => tracing::debug!(key = notification.message_key(), "notification"),
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue(Instant::now());
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Removes notifications whose exit transition has finished.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Same as [`Manager::tick`] with an explicit clock.
    pub fn tick_at(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| n.phase_at(now) != Phase::Expired);
        if self.visible.len() < before {
            self.promote_from_queue(now);
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Clears all notifications (visible and queued).
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Promotes queued notifications while there's space, restarting their
    /// timers so they get the full display time.
    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE {
            if let Some(notification) = self.queue.pop_front() {
                self.visible.push_back(notification.created(now));
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::notification::{DISPLAY_DURATION, EXIT_DURATION};
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();

        for i in 0..MAX_VISIBLE {
            manager.push(Notification::info(format!("test-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);

        manager.push(Notification::info("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();

        let mut first_id = None;
        for i in 0..MAX_VISIBLE {
            let n = Notification::info(format!("visible-{i}"));
            if i == 0 {
                first_id = Some(n.id());
            }
            manager.push(n);
        }
        manager.push(Notification::info("queued"));

        assert!(manager.dismiss(first_id.unwrap()));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Notification::info("temp").id();
        assert!(!manager.dismiss(fake_id));
    }

    #[test]
    fn tick_keeps_toasts_during_exit_transition() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.push(Notification::info("saved").created(start));

        manager.tick_at(start + DISPLAY_DURATION + Duration::from_millis(100));
        assert_eq!(manager.visible_count(), 1);

        manager.tick_at(start + DISPLAY_DURATION + EXIT_DURATION);
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn tick_removes_expired_errors_too() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.push(Notification::error("failed").created(start));

        manager.tick_at(start + DISPLAY_DURATION + EXIT_DURATION);
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn expired_toasts_make_room_for_queued_ones() {
        let start = Instant::now();
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::info(format!("old-{i}")).created(start));
        }
        manager.push(Notification::info("waiting").created(start));

        let later = start + DISPLAY_DURATION + EXIT_DURATION;
        manager.tick_at(later);

        assert_eq!(manager.visible_count(), 1);
        let promoted = manager.visible().next().unwrap();
        assert_eq!(promoted.message_key(), "waiting");
        assert_eq!(promoted.created_at(), later);
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.push(Notification::info(format!("test-{i}")));
        }
        manager.clear();
        assert!(!manager.has_notifications());
    }
}
