//! Log output for the CLI.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Logs go to stderr so command output on
/// stdout stays clean.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v`/`-q`.
pub(crate) fn init(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .init();
}
