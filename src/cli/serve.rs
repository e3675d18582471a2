//! Transport loops for the MCP server.

use std::net::{IpAddr, SocketAddr};

use axum::Router;
use miette::{IntoDiagnostic, Result};
use rmcp::{ServiceExt, transport::stdio as stdio_transport};
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::client::VikunjaClient;
use crate::mcp::{VikunjaServer, create_mcp_service};

/// Serve a single MCP session over stdin/stdout until the host disconnects.
pub(crate) async fn stdio(client: VikunjaClient) -> Result<()> {
    let service = VikunjaServer::new(client)
        .serve(stdio_transport())
        .await
        .into_diagnostic()?;

    let reason = service.waiting().await.into_diagnostic()?;
    info!(?reason, "stdio session ended");
    Ok(())
}

/// Router with the Streamable HTTP service nested at `/mcp`.
pub fn http_router(client: VikunjaClient, cancellation_token: CancellationToken) -> Router {
    Router::new()
        .nest_service("/mcp", create_mcp_service(client, cancellation_token))
        .layer(TraceLayer::new_for_http())
}

/// Serve Streamable HTTP until Ctrl-C, then close open sessions.
pub(crate) async fn http(client: VikunjaClient, host: IpAddr, port: u16) -> Result<()> {
    let ct = CancellationToken::new();
    let app = http_router(client, ct.child_token());

    let addr = SocketAddr::new(host, port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .into_diagnostic()?;
    info!("MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
            ct.cancel();
        })
        .await
        .into_diagnostic()
}
