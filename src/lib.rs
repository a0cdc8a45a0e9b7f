// SPDX-License-Identifier: MPL-2.0
//! `cms_admin` is a desktop admin panel for a small content-management server,
//! built with the Iced GUI framework.
//!
//! It lists content records, edits them in a dialog with up to five attached
//! images, and reports outcomes through toasts and native alerts. Text is
//! localized with Fluent and preferences are read from a TOML settings file.

pub mod api;
pub mod app;
pub mod content;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;

#[cfg(test)]
mod test_utils;
