//! Tracing subscriber initialization. Diagnostics go to stderr so the
//! reports printed on stdout stay clean.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber.
///
/// Precedence: `--verbose` (debug) > `RUST_LOG` > `default_level` from the config.
pub fn init_logger(default_level: &str, verbose: bool, colored_output: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact()
        .with_ansi(colored_output);

    // A second init (e.g. library used from tests) is not an error.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
