//! Diagnostic logging for the stash binary.
//!
//! Logs always go to stderr: `stash -t 1` output is piped into other tools
//! and must stay byte-exact.

use std::io::{self, IsTerminal};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for a `-v` count: 0 = warn, 1 = debug, 2+ = trace.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "stash=warn",
        1 => "stash=debug",
        _ => "stash=trace",
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the verbosity flag.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
