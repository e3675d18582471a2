//! HTTP client for the Vikunja REST API.
//!
//! One request primitive ([`VikunjaClient::request`]) handles authentication,
//! JSON encoding, and status interpretation. Each resource family adds its
//! operations in its own module as a separate `impl VikunjaClient` block.

mod assignees;
mod attachments;
mod buckets;
mod comments;
mod error;
mod labels;
pub mod models;
mod projects;
mod relations;
mod tasks;
mod views;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use models::Message;

pub use buckets::{CreateBucket, UpdateBucket};
pub use error::{ClientError, ClientResult};
pub use labels::{CreateLabel, UpdateLabel};
pub use projects::{CreateProject, ProjectListParams, UpdateProject};
pub use tasks::{CreateTask, UpdateTask};
pub use views::{CreateView, UpdateView};

/// Pagination, search, sorting, and filter options shared by list endpoints.
///
/// The filter expression is passed through unparsed.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Client bound to one Vikunja instance and one API token.
///
/// Holds only immutable configuration, so a single instance can be shared
/// across concurrent tool calls behind an `Arc`.
pub struct VikunjaClient {
    api_url: String,
    token: String,
    client: Client,
}

impl VikunjaClient {
    pub fn new(config: Config) -> ClientResult<Self> {
        ensure_crypto_provider();

        let api_url = config.api_url();
        let client = Client::builder()
            .user_agent(concat!("vikunja-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ClientError::Transport {
                url: api_url.clone(),
                source,
            })?;

        Ok(Self {
            api_url,
            token: config.token().to_string(),
            client,
        })
    }

    /// API root every request path is appended to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Start a request with the bearer token attached.
    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.api_url, path);
        debug!(%method, path, "vikunja request");
        self.client
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
    }

    /// Send a JSON request and decode the response into `T`.
    ///
    /// A 204 response, an empty body, or a `null` body yields `T::default()`.
    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let mut request = self
            .builder(method, path)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(request, path).await
    }

    pub(crate) async fn get<T>(&self, path: &str) -> ClientResult<T>
    where
        T: DeserializeOwned + Default,
    {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        let _ack: Message = self.request(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    /// GET with query parameters.
    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned + Default,
        Q: Serialize + ?Sized,
    {
        let request = self
            .builder(Method::GET, path)
            .header(CONTENT_TYPE, "application/json")
            .query(query);
        self.send(request, path).await
    }

    pub(crate) async fn send<T>(&self, request: RequestBuilder, path: &str) -> ClientResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: format!("{}{}", self.api_url, path),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), path, "vikunja request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(T::default());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| ClientError::Transport {
                url: format!("{}{}", self.api_url, path),
                source,
            })?;
        // Vikunja encodes empty collections as `null`.
        let trimmed = bytes.trim_ascii();
        if trimmed.is_empty() || trimmed == b"null" {
            return Ok(T::default());
        }
        Ok(serde_json::from_slice(trimmed)?)
    }
}

/// reqwest is built without a bundled TLS provider; install ring once.
fn ensure_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}
