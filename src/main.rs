//! watchface — a weather watchface rendered off-screen on the host.
//!
//! Run with:  `RUST_LOG=info watchface`
//!
//! stdout carries the companion channel (one JSON message per line);
//! logs and the optional ASCII preview go to stderr.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    // Logs go to stderr so stdout stays clean for companion traffic.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("watchface v{} starting", env!("CARGO_PKG_VERSION"));

    let config = face_config::load(face_config::default_path()).unwrap_or_default();
    face_runtime::run(config).map_err(Into::into)
}
