//! TMS orders proxy.
//!
//! Forwards order queries from a browser frontend to a single upstream
//! logistics API, injecting the API credential and caching successful
//! responses for a short window.
//!
//! # Architecture Overview
//!
//! ```text
//!   Frontend ──▶ request id ──▶ CORS gate ──▶ handler ──▶ cache
//!                                               ▲           │ (miss)
//!                                               │           ▼
//!                                               │     upstream client ──▶ Upstream API
//!                                               │           │ deadline + retry
//!                                               └───────────┘ classified reply
//! ```

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tmsorders-proxy")]
#[command(about = "Caching proxy for the upstream TMS orders API", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    tmsorders_proxy::lifecycle::startup::run(cli.config.as_deref()).await?;
    Ok(())
}
