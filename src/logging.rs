//! Tracing subscriber setup for the binary.

use std::env;
use std::io;

use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum LogFormat {
    Json,
    Pretty,
    Compact,
}

/// Installs the global subscriber, writing to stderr.
///
/// `DASHCLOCK_LOG` overrides the filter and `DASHCLOCK_LOG_FORMAT` picks
/// `compact`, `pretty` or `json`. Calling this twice is harmless.
pub fn init(verbose: bool) {
    let filter = build_filter(env::var("DASHCLOCK_LOG").ok().as_deref(), verbose);
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr);

    let result = match parse_format(env::var("DASHCLOCK_LOG_FORMAT").ok().as_deref()) {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    // A subscriber may already be installed by an embedding application.
    let _ = result;
}

fn build_filter(directive: Option<&str>, verbose: bool) -> EnvFilter {
    match directive.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => EnvFilter::new(value),
        None if verbose => EnvFilter::new("debug"),
        None => EnvFilter::new("info"),
    }
}

fn parse_format(value: Option<&str>) -> LogFormat {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("json") => LogFormat::Json,
        Some("pretty") => LogFormat::Pretty,
        _ => LogFormat::Compact,
    }
}
