//! Tracing subscriber setup for the command line

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Filter used with `--quiet`
pub const QUIET_FILTER: &str = "warn";

/// Build the filter: `RUST_LOG` wins, otherwise the quiet or default level
pub fn env_filter(quiet: bool) -> EnvFilter {
    let fallback = if quiet { QUIET_FILTER } else { DEFAULT_FILTER };
    let from_env = EnvFilter::try_from_default_env();
    from_env.unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install a stderr `fmt` subscriber
///
/// Returns false if a global subscriber was already installed.
pub fn init(quiet: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(quiet))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
