//! Tracing subscriber setup.
//!
//! Verbosity 0/1/2 maps to `info`/`debug`/`trace` for the stubgen crates.
//! `STUBGEN_LOG` overrides the computed filter with a full `EnvFilter` directive.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "STUBGEN_LOG";

/// Filter directive for a verbosity level.
pub fn filter_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    format!("warn,stubgen_core={level},stubgen_engine={level},stubgen_cli={level}")
}

/// Install the global fmt subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
