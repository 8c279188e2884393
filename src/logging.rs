//! Tracing setup
//!
//! Diagnostics go to stderr through `tracing-subscriber`; stdout is reserved
//! for what the shell shows the user.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Build the filter: the `RUST_LOG` value when it parses, otherwise the
/// configured directive, otherwise `warn`
fn build_filter(env_directive: Option<&str>, default_directive: &str) -> EnvFilter {
    env_directive
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_new(default_directive).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Install the global subscriber; later calls are no-ops
pub fn init(default_directive: &str) {
    TRACING_INIT.call_once(|| {
        let subscriber = fmt()
            .with_env_filter(build_filter(
                std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
                default_directive,
            ))
            .with_writer(std::io::stderr)
            .with_target(false)
            .finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("tracing initialized");
        }
    });
}
