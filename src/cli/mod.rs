//! Command-line entry point for the `vikunja-mcp` binary.

mod serve;

use std::net::IpAddr;

use clap::{ArgAction, Parser, ValueEnum};
use miette::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::client::VikunjaClient;
use crate::config::{Config, ConfigError};

pub use serve::http_router;

/// How the MCP host talks to this server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// JSON-RPC over stdin/stdout
    Stdio,
    /// Streamable HTTP on `/mcp`
    Http,
}

#[derive(Parser, Debug)]
#[command(name = "vikunja-mcp")]
#[command(author, version, about = "MCP server for the Vikunja task manager", long_about = None)]
pub struct Cli {
    /// Vikunja base URL, e.g. https://vikunja.example.com
    #[arg(long, env = "VIKUNJA_URL")]
    pub url: Option<String>,

    /// Vikunja API token
    #[arg(long, env = "VIKUNJA_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Transport to serve MCP over
    #[arg(long, value_enum, default_value_t = Transport::Stdio)]
    pub transport: Transport,

    /// Host address to bind to (http transport)
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on (http transport)
    #[arg(short, long, default_value_t = 3737)]
    pub port: u16,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Validated connection settings; fails before any network activity.
    pub fn config(&self) -> std::result::Result<Config, ConfigError> {
        Config::new(self.url.clone(), self.token.clone())
    }
}

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "vikunja_mcp=info",
        1 => "vikunja_mcp=debug,tower_http=debug",
        _ => "vikunja_mcp=trace,tower_http=trace,rmcp=debug",
    }
}

/// Logs go to stderr; stdout belongs to the stdio transport.
fn init_tracing(verbosity: u8) {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbosity).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config()?;
    let client = VikunjaClient::new(config)?;
    info!(api_url = client.api_url(), transport = ?cli.transport, "starting vikunja-mcp");

    match cli.transport {
        Transport::Stdio => serve::stdio(client).await,
        Transport::Http => serve::http(client, cli.host, cli.port).await,
    }
}
