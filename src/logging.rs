//! Logging bootstrap for the server binary
//!
//! stdout carries the MCP stdio transport, so log lines go to stderr only.
//! `RUST_LOG`, when set, takes precedence over the level passed in.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global `tracing` subscriber
///
/// # Errors
/// - Returns an error when `level` is unsupported.
/// - Returns an error when a subscriber is already installed.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directives(normalize_level(level)?))
            .context("Failed to build log filter")?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging initialized");
    Ok(())
}

fn default_directives(level: &str) -> String {
    format!("pastoral_care={0},pastoral_care_mcp={0},warn", level)
}

fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => anyhow::bail!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        ),
    }
}
