//! Tracing subscriber setup.
//!
//! The library crates only emit events; this is the one place a
//! subscriber is installed. Events go to stderr so that stdout stays
//! parseable (`--output-format json`, `completions`).
//!
//! `RUST_LOG` replaces the level derived from `-v` / `-q`.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Workspace crates that get the level picked on the command line.
const CRATES: [&str; 3] = ["hexagen", "hexagen_core", "hexagen_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(args.log_level())));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// `hexagen=info,hexagen_core=info,...`; third-party crates stay silent.
fn filter_directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
