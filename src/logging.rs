//! Diagnostic logging setup for the binary.

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable overriding the log filter, e.g. `STATICI18N_LOG=statici18n=trace`.
pub const LOG_ENV: &str = "STATICI18N_LOG";

/// Installs a stderr subscriber. `verbose` lowers the default level from `warn` to `debug`.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
