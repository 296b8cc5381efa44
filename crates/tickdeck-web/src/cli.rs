//! Command-line options for the dashboard server.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--bind` | `127.0.0.1:8787` | Address to listen on |
//! | `--mock` | `false` | Serve deterministic offline data |
//! | `--timeout-ms` | `10000` | Upstream request timeout in ms |
//! | `--alphavantage-key` | from env | Alpha Vantage API key |
//!
//! # Examples
//!
//! ```bash
//! # Offline demo with deterministic data
//! tickdeck-web --mock
//!
//! # Real providers with an explicit key
//! tickdeck-web --alphavantage-key YOUR_KEY --bind 0.0.0.0:8080
//! ```

use std::net::SocketAddr;

use clap::Parser;

/// Stock dashboard server: price history, fundamentals, and scored news
/// for a ticker.
#[derive(Debug, Parser)]
#[command(name = "tickdeck-web", version, about = "Stock dashboard web server")]
pub struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8787")]
    pub bind: SocketAddr,

    /// Serve deterministic mock data instead of calling real providers.
    #[arg(long, default_value_t = false)]
    pub mock: bool,

    /// Upstream request timeout in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Alpha Vantage API key.
    ///
    /// Falls back to TICKDECK_ALPHAVANTAGE_API_KEY, then
    /// ALPHAVANTAGE_API_KEY. Required unless running with --mock.
    #[arg(long)]
    pub alphavantage_key: Option<String>,
}
