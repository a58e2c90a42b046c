//! Logging wiring.
//!
//! All crates emit `tracing` events; this is the only place a subscriber is
//! installed. Logs go to stderr so `--preview` and `inspect` output on stdout
//! can be piped cleanly.

use tracing_subscriber::{fmt, EnvFilter};

use crate::args::LogFormat;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the workspace crates log at `debug`
/// with `--verbose` and at `warn` without it.
pub fn init(verbose: bool, format: LogFormat) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("article={level},templates={level},linkpost={level},warn"))
    });

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
