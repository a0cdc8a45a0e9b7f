// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Address of the content server when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Default timeout for a single HTTP request (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
};
