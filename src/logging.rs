//! Tracing setup for the command-line tools.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PSMC_LOG";

/// Install a stderr subscriber filtered by `PSMC_LOG`, defaulting to `warn`.
///
/// Stdout is left to the tools' answers.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    install(filter);
}

/// Install a subscriber with an explicit filter string.
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter));
}

fn install(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
