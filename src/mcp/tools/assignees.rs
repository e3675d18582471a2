//! Task assignee tools.

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
use crate::mcp::tools::{map_client_error, text_result};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListAssigneesParams {
    #[schemars(description = "Task ID")]
    pub task_id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AssigneeParams {
    #[schemars(description = "Task ID")]
    pub task_id: i64,
    #[schemars(description = "User ID")]
    pub user_id: i64,
}

pub(crate) fn router() -> ToolRouter<VikunjaServer> {
    VikunjaServer::assignee_router()
}

#[tool_router(router = assignee_router)]
impl VikunjaServer {
    #[tool(
        name = "vikunja_list_assignees",
        description = "List users assigned to a task"
    )]
    pub async fn list_assignees(
        &self,
        params: Parameters<ListAssigneesParams>,
    ) -> Result<CallToolResult, McpError> {
        let task_id = params.0.task_id;
        let users = self
            .client()
            .list_assignees(task_id)
            .await
            .map_err(map_client_error)?;

        text_result(format::listing(
            &users,
            "assignee",
            &format!(" on task #{}", task_id),
            "No assignees on this task.",
            format::user,
        ))
    }

    #[tool(name = "vikunja_assign_user", description = "Assign a user to a task")]
    pub async fn assign_user(
        &self,
        params: Parameters<AssigneeParams>,
    ) -> Result<CallToolResult, McpError> {
        let AssigneeParams { task_id, user_id } = params.0;
        self.client()
            .assign_user(task_id, user_id)
            .await
            .map_err(map_client_error)?;

        info!(task_id, user_id, "assigned user");
        text_result(format!("Assigned user #{} to task #{}", user_id, task_id))
    }

    #[tool(
        name = "vikunja_unassign_user",
        description = "Remove a user from a task's assignees"
    )]
    pub async fn unassign_user(
        &self,
        params: Parameters<AssigneeParams>,
    ) -> Result<CallToolResult, McpError> {
        let AssigneeParams { task_id, user_id } = params.0;
        self.client()
            .unassign_user(task_id, user_id)
            .await
            .map_err(map_client_error)?;

        info!(task_id, user_id, "unassigned user");
        text_result(format!(
            "Unassigned user #{} from task #{}",
            user_id, task_id
        ))
    }
}

#[cfg(test)]
#[path = "assignees_test.rs"]
mod assignees_test;
