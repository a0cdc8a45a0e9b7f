// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! The filter comes from `RUST_LOG` when set; otherwise the crate logs at
//! `debug` and everything else at `info`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,cms_admin=debug";

/// Logging configuration.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Emit one JSON object per line instead of human-readable output.
    pub json: bool,
}

impl LogConfig {
    /// Reads `CMS_ADMIN_LOG_FORMAT=json` from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            json: std::env::var("CMS_ADMIN_LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber.
///
/// Does nothing if a subscriber is already installed.
pub fn init(config: &LogConfig) {
    let installed = if config.json {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init()
    };

    if installed.is_ok() {
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            json = config.json,
            "logging initialized"
        );
    }
}
