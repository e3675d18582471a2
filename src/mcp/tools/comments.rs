//! Task comment tools.

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
pub struct ListCommentsParams {
    #[schemars(description = "Task ID")]
    pub task_id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateCommentParams {
    #[schemars(description = "Task ID")]
    pub task_id: i64,
    #[schemars(description = "Comment text (supports markdown)")]
    pub comment: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateCommentParams {
    #[schemars(description = "Task ID")]
    pub task_id: i64,
    #[schemars(description = "Comment ID")]
    pub comment_id: i64,
    #[schemars(description = "New comment text")]
    pub comment: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteCommentParams {
    #[schemars(description = "Task ID")]
    pub task_id: i64,
    #[schemars(description = "Comment ID to delete")]
    pub comment_id: i64,
}

fn check_comment(comment: &str) -> Result<(), McpError> {
    if comment.trim().is_empty() {
        Err(invalid_params("comment must not be empty"))
    } else {
        Ok(())
    }
}

pub(crate) fn router() -> ToolRouter<VikunjaServer> {
    VikunjaServer::comment_router()
}

#[tool_router(router = comment_router)]
impl VikunjaServer {
    #[tool(name = "vikunja_list_comments", description = "List comments on a task")]
    pub async fn list_comments(
        &self,
        params: Parameters<ListCommentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let task_id = params.0.task_id;
        let comments = self
            .client()
            .list_comments(task_id)
            .await
            .map_err(map_client_error)?;

        text_result(format::listing(
            &comments,
            "comment",
            &format!(" on task #{}", task_id),
            "No comments on this task.",
            format::comment,
        ))
    }

    #[tool(name = "vikunja_create_comment", description = "Add a comment to a task")]
    pub async fn create_comment(
        &self,
        params: Parameters<CreateCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        let CreateCommentParams { task_id, comment } = params.0;
        check_comment(&comment)?;

        let created = self
            .client()
            .create_comment(task_id, &comment)
            .await
            .map_err(map_client_error)?;

        info!(task_id, comment_id = created.id, "created comment");
        text_result(format!(
            "Created comment [{}] on task #{}",
            created.id, task_id
        ))
    }

    #[tool(name = "vikunja_update_comment", description = "Edit a comment on a task")]
    pub async fn update_comment(
        &self,
        params: Parameters<UpdateCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateCommentParams {
            task_id,
            comment_id,
            comment,
        } = params.0;
        check_comment(&comment)?;

        let updated = self
            .client()
            .update_comment(task_id, comment_id, &comment)
            .await
            .map_err(map_client_error)?;

        info!(task_id, comment_id, "updated comment");
        text_result(format!(
            "Updated comment [{}] on task #{}",
            updated.id, task_id
        ))
    }

    #[tool(
        name = "vikunja_delete_comment",
        description = "Delete a comment from a task"
    )]
    pub async fn delete_comment(
        &self,
        params: Parameters<DeleteCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        let DeleteCommentParams {
            task_id,
            comment_id,
        } = params.0;
        self.client()
            .delete_comment(task_id, comment_id)
            .await
            .map_err(map_client_error)?;

        info!(task_id, comment_id, "deleted comment");
        text_result(format!(
            "Deleted comment #{} from task #{}",
            comment_id, task_id
        ))
    }
}

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;
