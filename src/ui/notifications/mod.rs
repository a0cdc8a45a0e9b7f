// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily in the bottom-right corner to report
//! the outcome of an action (content saved, image deleted, request failed)
//! without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity and lifetime phases
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::info("notification-content-saved"));
//!
//! // In the view function
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Every toast is shown for three seconds, then plays a 300 ms exit
//! transition and is removed. At most three are visible; the rest wait in
//! a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Phase, Severity, DISPLAY_DURATION, EXIT_DURATION};
pub use toast::Toast;
