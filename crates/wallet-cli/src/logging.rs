use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Logs go to stderr so stdout stays clean for
/// the menu and for `--json` output.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A subscriber may already be installed (tests); keep the first one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
