//! MCP Streamable HTTP service creation
//!
//! Used by the `http` transport; the service is nested into an Axum router.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::client::VikunjaClient;

use super::server::VikunjaServer;

/// Create the Streamable HTTP service.
///
/// Every session gets its own [`VikunjaServer`]; all of them share one client.
///
/// # Example
/// ```no_run
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// use vikunja_mcp::{Config, VikunjaClient, mcp::create_mcp_service};
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = VikunjaClient::new(Config::from_env()?)?;
/// let mcp_service = create_mcp_service(client, CancellationToken::new());
///
/// let app: Router = Router::new().nest_service("/mcp", mcp_service);
/// # Ok(())
/// # }
/// ```
pub fn create_mcp_service(
    client: impl Into<Arc<VikunjaClient>>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<VikunjaServer, LocalSessionManager> {
    let client = client.into();

    // rmcp expects the factory to return io::Error
    let service_factory = move || -> Result<VikunjaServer, std::io::Error> {
        Ok(VikunjaServer::new(Arc::clone(&client)))
    };

    let config = StreamableHttpServerConfig::default()
        .with_stateful_mode(true)
        .with_cancellation_token(cancellation_token);

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
