//! MCP tool implementations
//!
//! One module per resource family. Each adds a `#[tool_router]` impl block to
//! [`VikunjaServer`](super::VikunjaServer) and exposes it through `router()`.

pub mod assignees;
pub mod attachments;
pub mod buckets;
pub mod comments;
pub mod labels;
pub mod projects;
pub mod relations;
pub mod tasks;
pub mod views;

use rmcp::{ErrorData as McpError, model::*};
use serde_json::json;

use crate::client::ClientError;

/// Highest priority Vikunja accepts (0 = unset, 4 = DO NOW).
pub(crate) const MAX_PRIORITY: u8 = 4;

/// Map a client failure to a tool error carrying its message verbatim.
pub(crate) fn map_client_error(err: ClientError) -> McpError {
    match &err {
        ClientError::Api { status, .. } => {
            McpError::internal_error(err.to_string(), Some(json!({ "status": status })))
        }
        ClientError::NotFound { resource, id } => McpError::resource_not_found(
            err.to_string(),
            Some(json!({ "resource": resource, "id": id })),
        ),
        _ => McpError::internal_error(err.to_string(), None),
    }
}

pub(crate) fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}

pub(crate) fn text_result(text: impl Into<String>) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(text.into())]))
}

pub(crate) fn check_priority(priority: Option<u8>) -> Result<(), McpError> {
    match priority {
        Some(p) if p > MAX_PRIORITY => Err(invalid_params(format!(
            "priority must be between 0 and {}, got {}",
            MAX_PRIORITY, p
        ))),
        _ => Ok(()),
    }
}

pub(crate) fn check_title(title: &str) -> Result<(), McpError> {
    if title.trim().is_empty() {
        Err(invalid_params("title must not be empty"))
    } else {
        Ok(())
    }
}
