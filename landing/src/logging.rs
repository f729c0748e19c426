//! `tracing` output for the browser devtools console.

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

const LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::DEBUG
} else {
    Level::INFO
};

/// Install the console subscriber. Safe to call more than once.
pub fn init() {
    // No wall clock on wasm32-unknown-unknown, so no timestamps.
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    let installed = tracing_subscriber::registry()
        .with(LevelFilter::from_level(LOG_LEVEL))
        .with(console_layer)
        .try_init();
    if installed.is_ok() {
        tracing::debug!(level = %LOG_LEVEL, "console logging ready");
    }
}
