// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`content_list`] - Listing of content records with create, edit and delete actions
//! - [`modal`] - The content dialog shown on top of the list
//!
//! # Dialog Internals
//!
//! - [`content_form`] - Field validation and the submit pipeline
//! - [`staging`] - Images attached to the record being edited
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod content_form;
pub mod content_list;
pub mod design_tokens;
pub mod modal;
pub mod notifications;
pub mod staging;
pub mod styles;
pub mod theming;
