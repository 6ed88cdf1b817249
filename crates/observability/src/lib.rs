//! Tracing/logging setup shared by binaries that embed the catalog.
//!
//! Binaries call [`init`] once at startup; tests and embedders that want a
//! fixed configuration use [`tracing::init_with`].

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(tracing::LogConfig::from_env());
}

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use self::tracing::{LogConfig, LogFormat};
