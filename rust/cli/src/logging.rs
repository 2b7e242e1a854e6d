//! Tracing setup for the `cardduel` binary.
//!
//! Engine events go to stderr so they never mix with game output on stdout.
//! The filter comes from `CARDDUEL_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `warn`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CARDDUEL_LOG";

/// Builds the filter from `CARDDUEL_LOG`, falling back to `warn`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize logging for the application. Safe to call more than once.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_twice_does_not_panic() {
        init_logging();
        init_logging();
    }
}
