//! Task attachment tools.
//!
//! File contents travel as base64 text and are decoded before upload.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use mime_guess::mime::Mime;
use rmcp::{
    ErrorData as McpError,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::mcp::VikunjaServer;
use crate::mcp::format;
use crate::mcp::tools::{invalid_params, map_client_error, text_result};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListAttachmentsParams {
    #[schemars(description = "Task ID")]
    pub task_id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UploadAttachmentParams {
    #[schemars(description = "Task ID")]
    pub task_id: i64,
    #[schemars(description = "File name including extension")]
    pub file_name: String,
    #[schemars(description = "File content encoded as base64")]
    pub content_base64: String,
    #[schemars(description = "MIME type (guessed from the file name when omitted)")]
    pub mime_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteAttachmentParams {
    #[schemars(description = "Task ID")]
    pub task_id: i64,
    #[schemars(description = "Attachment ID to delete")]
    pub attachment_id: i64,
}

/// Explicit MIME type if valid, otherwise a guess from the file extension.
fn resolve_mime(file_name: &str, explicit: Option<&str>) -> Result<String, McpError> {
    match explicit.map(str::trim).filter(|m| !m.is_empty()) {
        Some(mime) => mime
            .parse::<Mime>()
            .map(|m| m.to_string())
            .map_err(|_| invalid_params(format!("invalid MIME type '{}'", mime))),
        None => Ok(mime_guess::from_path(file_name)
            .first_or_octet_stream()
            .to_string()),
    }
}

pub(crate) fn router() -> ToolRouter<VikunjaServer> {
    VikunjaServer::attachment_router()
}

#[tool_router(router = attachment_router)]
impl VikunjaServer {
    #[tool(
        name = "vikunja_list_attachments",
        description = "List files attached to a task"
    )]
    pub async fn list_attachments(
        &self,
        params: Parameters<ListAttachmentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let task_id = params.0.task_id;
        let attachments = self
            .client()
            .list_attachments(task_id)
            .await
            .map_err(map_client_error)?;

        text_result(format::listing(
            &attachments,
            "attachment",
            &format!(" on task #{}", task_id),
            "No attachments on this task.",
            format::attachment,
        ))
    }

    #[tool(
        name = "vikunja_upload_attachment",
        description = "Upload a file to a task. The file content must be base64 encoded."
    )]
    pub async fn upload_attachment(
        &self,
        params: Parameters<UploadAttachmentParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        if params.file_name.trim().is_empty() {
            return Err(invalid_params("file_name must not be empty"));
        }
        let bytes = STANDARD
            .decode(params.content_base64.trim())
            .map_err(|e| invalid_params(format!("content_base64 is not valid base64: {}", e)))?;
        let mime = resolve_mime(&params.file_name, params.mime_type.as_deref())?;

        let attachment = self
            .client()
            .upload_attachment(params.task_id, &params.file_name, bytes, &mime)
            .await
            .map_err(map_client_error)?;

        info!(
            task_id = params.task_id,
            attachment_id = attachment.id,
            mime = %mime,
            "uploaded attachment"
        );
        text_result(format!(
            "Uploaded attachment [{}] \"{}\" to task #{}",
            attachment.id, params.file_name, params.task_id
        ))
    }

    #[tool(
        name = "vikunja_delete_attachment",
        description = "Delete an attachment from a task"
    )]
    pub async fn delete_attachment(
        &self,
        params: Parameters<DeleteAttachmentParams>,
    ) -> Result<CallToolResult, McpError> {
        let DeleteAttachmentParams {
            task_id,
            attachment_id,
        } = params.0;
        self.client()
            .delete_attachment(task_id, attachment_id)
            .await
            .map_err(map_client_error)?;

        info!(task_id, attachment_id, "deleted attachment");
        text_result(format!(
            "Deleted attachment #{} from task #{}",
            attachment_id, task_id
        ))
    }
}

#[cfg(test)]
#[path = "attachments_test.rs"]
mod attachments_test;
