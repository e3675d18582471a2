//! Label tools.

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

use crate::client::{CreateLabel, ListParams, UpdateLabel};
use crate::mcp::VikunjaServer;
use crate::mcp::format;
use crate::mcp::tools::{check_title, map_client_error, text_result};

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListLabelsParams {
    #[schemars(description = "Page number")]
    pub page: Option<u32>,
    #[schemars(description = "Labels per page")]
    pub per_page: Option<u32>,
    #[schemars(description = "Search query matched against label titles")]
    pub s: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LabelIdParams {
    #[schemars(description = "Label ID")]
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateLabelParams {
    #[schemars(description = "Label title")]
    pub title: String,
    #[schemars(description = "Hex color code (e.g., \"e8e8e8\")")]
    pub hex_color: Option<String>,
    #[schemars(description = "Label description")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateLabelParams {
    #[schemars(description = "Label ID")]
    pub id: i64,
    #[schemars(description = "New title")]
    pub title: Option<String>,
    #[schemars(description = "New hex color code")]
    pub hex_color: Option<String>,
    #[schemars(description = "New description")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TaskLabelParams {
    #[schemars(description = "Task ID")]
    pub task_id: i64,
    #[schemars(description = "Label ID")]
    pub label_id: i64,
}

pub(crate) fn router() -> ToolRouter<VikunjaServer> {
    VikunjaServer::label_router()
}

#[tool_router(router = label_router)]
impl VikunjaServer {
    #[tool(name = "vikunja_list_labels", description = "List all labels")]
    pub async fn list_labels(
        &self,
        params: Parameters<ListLabelsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let query = ListParams {
            page: params.page,
            per_page: params.per_page,
            s: params.s,
            ..Default::default()
        };
        let labels = self
            .client()
            .list_labels(&query)
            .await
            .map_err(map_client_error)?;

        text_result(format::listing(
            &labels,
            "label",
            "",
            "No labels found.",
            format::label,
        ))
    }

    #[tool(name = "vikunja_get_label", description = "Get a label by ID")]
    pub async fn get_label(
        &self,
        params: Parameters<LabelIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let label = self
            .client()
            .get_label(params.0.id)
            .await
            .map_err(map_client_error)?;

        let mut text = format::label(&label);
        if !label.description.is_empty() {
            text.push_str(&format!("\n{}", label.description));
        }
        text_result(text)
    }

    #[tool(name = "vikunja_create_label", description = "Create a new label")]
    pub async fn create_label(
        &self,
        params: Parameters<CreateLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        check_title(&params.title)?;

        let data = CreateLabel {
            title: params.title,
            hex_color: params.hex_color,
            description: params.description,
        };
        let label = self
            .client()
            .create_label(&data)
            .await
            .map_err(map_client_error)?;

        info!(label_id = label.id, "created label");
        text_result(format!("Created label [{}] \"{}\"", label.id, label.title))
    }

    #[tool(
        name = "vikunja_update_label",
        description = "Update a label. Only the supplied fields are changed."
    )]
    pub async fn update_label(
        &self,
        params: Parameters<UpdateLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let data = UpdateLabel {
            title: params.title,
            hex_color: params.hex_color,
            description: params.description,
        };
        let label = self
            .client()
            .update_label(params.id, &data)
            .await
            .map_err(map_client_error)?;

        info!(label_id = label.id, "updated label");
        text_result(format!("Updated label [{}] \"{}\"", label.id, label.title))
    }

    #[tool(name = "vikunja_delete_label", description = "Delete a label")]
    pub async fn delete_label(
        &self,
        params: Parameters<LabelIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = params.0.id;
        self.client()
            .delete_label(id)
            .await
            .map_err(map_client_error)?;

        info!(label_id = id, "deleted label");
        text_result(format!("Deleted label #{}", id))
    }

    #[tool(name = "vikunja_add_label_to_task", description = "Add a label to a task")]
    pub async fn add_label_to_task(
        &self,
        params: Parameters<TaskLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        let TaskLabelParams { task_id, label_id } = params.0;
        let label = self
            .client()
            .add_label_to_task(task_id, label_id)
            .await
            .map_err(map_client_error)?;

        info!(task_id, label_id, "added label to task");
        // The endpoint may answer with the bare association, which has no title.
        if label.title.is_empty() {
            text_result(format!("Added label #{} to task #{}", label_id, task_id))
        } else {
            text_result(format!(
                "Added label \"{}\" to task #{}",
                label.title, task_id
            ))
        }
    }

    #[tool(
        name = "vikunja_remove_label_from_task",
        description = "Remove a label from a task"
    )]
    pub async fn remove_label_from_task(
        &self,
        params: Parameters<TaskLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        let TaskLabelParams { task_id, label_id } = params.0;
        self.client()
            .remove_label_from_task(task_id, label_id)
            .await
            .map_err(map_client_error)?;

        info!(task_id, label_id, "removed label from task");
        text_result(format!(
            "Removed label #{} from task #{}",
            label_id, task_id
        ))
    }
}

#[cfg(test)]
#[path = "labels_test.rs"]
mod labels_test;
