//! Logging setup
//!
//! The engine logs through the `log` facade everywhere; this module gives
//! applications one call to wire those records to stderr via `env_logger`.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system.
///
/// Records at info level and above are shown by default; set `RUST_LOG` to
/// override (e.g. `RUST_LOG=grove_engine=trace` to watch the frame loop).
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
