//! Tracing subscriber setup for the `telecontent` binary.
//!
//! The library crates only emit events; this is the one place a subscriber
//! is installed. Events go to stderr so rendered content on stdout stays
//! clean for piping. `RUST_LOG` replaces the level chosen by `-v`/`-q`.

use std::io::{self, IsTerminal};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events pass the default filter.
const CRATES: [&str; 3] = ["telecontent", "telecontent_core", "telecontent_adapters"];

pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directives(args.log_level()))?,
    };

    let stderr = fmt::layer()
        .without_time()
        .with_target(false)
        .with_ansi(!args.no_color && io::stderr().is_terminal())
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .try_init()?;

    Ok(())
}

/// `crate=level` for each workspace crate; dependencies stay silent.
fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
