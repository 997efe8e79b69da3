//! Pastoral Care MCP Server - Main Entry Point
//!
//! This is the main entry point for the pastoral-care MCP server application.
//! The actual implementation is in the `pastoral_care` library.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use pastoral_care::{Clock, FixedClock, PastoralCareHandler, SystemClock, logging};

/// Pastoral Care MCP Server - follow-ups and care timelines via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the care data file (TOML)
    file: String,

    /// Pin "today" to a fixed date (YYYY-MM-DD) instead of the local clock
    #[arg(long, value_parser = parse_today)]
    today: Option<NaiveDate>,

    /// Log level written to stderr (RUST_LOG overrides)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_today(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    logging::init_logging(&args.log_level)?;

    let clock: Box<dyn Clock> = match args.today {
        Some(date) => {
            tracing::info!(%date, "using fixed clock");
            Box::new(FixedClock(date))
        }
        None => Box::new(SystemClock),
    };

    let handler = PastoralCareHandler::with_clock(&args.file, clock)?;
    tracing::info!(file = %args.file, "starting MCP server via stdio");
    serve_stdio(handler).await?;
    tracing::info!("MCP server stopped");
    Ok(())
}
