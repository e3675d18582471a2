//! Project view tools.

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

use crate::client::models::{BucketConfigurationMode, ViewKind};
use crate::client::{CreateView, UpdateView};
use crate::mcp::VikunjaServer;
use crate::mcp::format;
use crate::mcp::tools::{check_title, map_client_error, text_result};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListViewsParams {
    #[schemars(description = "Project ID")]
    pub project_id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ViewRefParams {
    #[schemars(description = "Project ID")]
    pub project_id: i64,
    #[schemars(description = "View ID")]
    pub view_id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateViewParams {
    #[schemars(description = "Project ID")]
    pub project_id: i64,
    #[schemars(description = "View title")]
    pub title: String,
    #[schemars(description = "View kind: list, gantt, table or kanban")]
    pub view_kind: ViewKind,
    #[schemars(description = "Filter expression limiting the tasks shown")]
    pub filter: Option<String>,
    #[schemars(description = "Bucket configuration for kanban views: none, manual or filter")]
    pub bucket_configuration_mode: Option<BucketConfigurationMode>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateViewParams {
    #[schemars(description = "Project ID")]
    pub project_id: i64,
    #[schemars(description = "View ID")]
    pub view_id: i64,
    #[schemars(description = "New title")]
    pub title: Option<String>,
    #[schemars(description = "New view kind: list, gantt, table or kanban")]
    pub view_kind: Option<ViewKind>,
    #[schemars(description = "New filter expression")]
    pub filter: Option<String>,
    #[schemars(description = "New bucket configuration mode")]
    pub bucket_configuration_mode: Option<BucketConfigurationMode>,
    #[schemars(description = "Bucket new tasks land in")]
    pub default_bucket_id: Option<i64>,
    #[schemars(description = "Bucket that marks tasks as done")]
    pub done_bucket_id: Option<i64>,
}

pub(crate) fn router() -> ToolRouter<VikunjaServer> {
    VikunjaServer::view_router()
}

#[tool_router(router = view_router)]
impl VikunjaServer {
    #[tool(
        name = "vikunja_list_views",
        description = "List the views (list, gantt, table, kanban) of a project"
    )]
    pub async fn list_views(
        &self,
        params: Parameters<ListViewsParams>,
    ) -> Result<CallToolResult, McpError> {
        let project_id = params.0.project_id;
        let views = self
            .client()
            .list_views(project_id)
            .await
            .map_err(map_client_error)?;

        text_result(format::listing(
            &views,
            "view",
            &format!(" in project #{}", project_id),
            "No views found for this project.",
            format::view,
        ))
    }

    #[tool(name = "vikunja_get_view", description = "Get a single project view")]
    pub async fn get_view(
        &self,
        params: Parameters<ViewRefParams>,
    ) -> Result<CallToolResult, McpError> {
        let view = self
            .client()
            .get_view(params.0.project_id, params.0.view_id)
            .await
            .map_err(map_client_error)?;

        let mut text = format::view(&view);
        if let Some(filter) = view.filter.as_deref().filter(|f| !f.is_empty()) {
            text.push_str(&format!("\nFilter: {}", filter));
        }
        text_result(text)
    }

    #[tool(
        name = "vikunja_create_view",
        description = "Create a new view in a project"
    )]
    pub async fn create_view(
        &self,
        params: Parameters<CreateViewParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        check_title(&params.title)?;

        let data = CreateView {
            title: params.title,
            view_kind: params.view_kind,
            filter: params.filter,
            bucket_configuration_mode: params.bucket_configuration_mode,
        };
        let view = self
            .client()
            .create_view(params.project_id, &data)
            .await
            .map_err(map_client_error)?;

        info!(project_id = params.project_id, view_id = view.id, "created view");
        text_result(format!(
            "Created view [{}] \"{}\" ({}) in project #{}",
            view.id, view.title, view.view_kind, params.project_id
        ))
    }

    #[tool(
        name = "vikunja_update_view",
        description = "Update a project view. Only the supplied fields are changed."
    )]
    pub async fn update_view(
        &self,
        params: Parameters<UpdateViewParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let data = UpdateView {
            title: params.title,
            view_kind: params.view_kind,
            filter: params.filter,
            bucket_configuration_mode: params.bucket_configuration_mode,
            default_bucket_id: params.default_bucket_id,
            done_bucket_id: params.done_bucket_id,
        };
        let view = self
            .client()
            .update_view(params.project_id, params.view_id, &data)
            .await
            .map_err(map_client_error)?;

        info!(project_id = params.project_id, view_id = view.id, "updated view");
        text_result(format!("Updated view [{}] \"{}\"", view.id, view.title))
    }

    #[tool(name = "vikunja_delete_view", description = "Delete a project view")]
    pub async fn delete_view(
        &self,
        params: Parameters<ViewRefParams>,
    ) -> Result<CallToolResult, McpError> {
        let ViewRefParams {
            project_id,
            view_id,
        } = params.0;
        self.client()
            .delete_view(project_id, view_id)
            .await
            .map_err(map_client_error)?;

        info!(project_id, view_id, "deleted view");
        text_result(format!(
            "Deleted view #{} from project #{}",
            view_id, project_id
        ))
    }
}

#[cfg(test)]
#[path = "views_test.rs"]
mod views_test;
