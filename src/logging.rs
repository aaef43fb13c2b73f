//! Logging setup.
//!
//! The library emits `tracing` events; binaries and tests embedding it call
//! [`init`] once to print them.

use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    prelude::*,
    util::TryInitError,
};

/// Installs a global subscriber writing to standard error.
///
/// Events are filtered by the `RUST_LOG` environment variable, defaulting to
/// `info`. Logs go to standard error so that command output on standard
/// output stays machine-readable.
///
/// # Errors
///
/// Returns [`TryInitError`] when a global subscriber is already installed.
pub fn init() -> Result<(), TryInitError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var("RUST_LOG")
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
}
