//! Connection settings for the Vikunja API.

use std::env;

use miette::Diagnostic;
use thiserror::Error;

/// Environment variable holding the Vikunja base URL.
pub const URL_VAR: &str = "VIKUNJA_URL";
/// Environment variable holding the Vikunja API token.
pub const TOKEN_VAR: &str = "VIKUNJA_API_TOKEN";

const API_PATH: &str = "/api/v1";

#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} environment variable is required")]
    #[diagnostic(
        code(vikunja_mcp::config::missing),
        help("Set {name} in the environment or pass it on the command line.")
    )]
    Missing { name: &'static str },
}

/// Base URL and bearer token, validated once at start-up.
#[derive(Clone)]
pub struct Config {
    base_url: String,
    token: String,
}

impl Config {
    /// Build a config from optional values, rejecting missing or blank ones.
    pub fn new(base_url: Option<String>, token: Option<String>) -> Result<Self, ConfigError> {
        let base_url = require(base_url, URL_VAR)?;
        let token = require(token, TOKEN_VAR)?;
        Ok(Self { base_url, token })
    }

    /// Read `VIKUNJA_URL` and `VIKUNJA_API_TOKEN` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(env::var(URL_VAR).ok(), env::var(TOKEN_VAR).ok())
    }

    /// Base URL as supplied by the user.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// API root: the base URL without trailing slashes, followed by `/api/v1`.
    pub fn api_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), API_PATH)
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

// The token stays out of debug output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

fn require(value: Option<String>, name: &'static str) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ConfigError::Missing { name }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
