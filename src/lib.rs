//! Vikunja task management exposed as Model Context Protocol tools.
//!
//! - [`config`]: connection settings (base URL and API token)
//! - [`client`]: typed HTTP client for the Vikunja REST API
//! - [`mcp`]: tool adapters, text formatting, and transports
//! - [`cli`]: command-line entry point used by the `vikunja-mcp` binary

pub mod cli;
pub mod client;
pub mod config;
pub mod mcp;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ClientError, ClientResult, VikunjaClient};
pub use config::{Config, ConfigError};
pub use mcp::VikunjaServer;
