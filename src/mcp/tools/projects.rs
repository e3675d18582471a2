//! Project management tools.

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

use crate::client::{CreateProject, ProjectListParams, UpdateProject};
use crate::mcp::VikunjaServer;
use crate::mcp::format;
use crate::mcp::tools::{check_title, map_client_error, text_result};

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListProjectsParams {
    #[schemars(description = "Page number (default: 1)")]
    pub page: Option<u32>,
    #[schemars(description = "Projects per page")]
    pub per_page: Option<u32>,
    #[schemars(description = "Search query matched against project titles")]
    pub s: Option<String>,
    #[schemars(description = "Include archived projects")]
    pub is_archived: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetProjectParams {
    #[schemars(description = "Project ID")]
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateProjectParams {
    #[schemars(description = "Project title")]
    pub title: String,
    #[schemars(description = "Project description")]
    pub description: Option<String>,
    #[schemars(description = "Parent project ID for nesting")]
    pub parent_project_id: Option<i64>,
    #[schemars(description = "Hex color code (e.g., \"#ff0000\")")]
    pub hex_color: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateProjectParams {
    #[schemars(description = "Project ID")]
    pub id: i64,
    #[schemars(description = "New title")]
    pub title: Option<String>,
    #[schemars(description = "New description")]
    pub description: Option<String>,
    #[schemars(description = "Archive or unarchive the project")]
    pub is_archived: Option<bool>,
    #[schemars(description = "Hex color code")]
    pub hex_color: Option<String>,
    #[schemars(description = "Move the project under another parent project")]
    pub parent_project_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteProjectParams {
    #[schemars(description = "Project ID to delete")]
    pub id: i64,
}

pub(crate) fn router() -> ToolRouter<VikunjaServer> {
    VikunjaServer::project_router()
}

#[tool_router(router = project_router)]
impl VikunjaServer {
    #[tool(
        name = "vikunja_list_projects",
        description = "List all projects the user has access to in Vikunja"
    )]
    pub async fn list_projects(
        &self,
        params: Parameters<ListProjectsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let query = ProjectListParams {
            page: params.page,
            per_page: params.per_page,
            s: params.s,
            is_archived: params.is_archived,
        };

        let projects = self
            .client()
            .list_projects(&query)
            .await
            .map_err(map_client_error)?;

        text_result(format::listing(
            &projects,
            "project",
            "",
            "No projects found.",
            format::project,
        ))
    }

    #[tool(
        name = "vikunja_get_project",
        description = "Get a project by ID with its description and views"
    )]
    pub async fn get_project(
        &self,
        params: Parameters<GetProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let project = self
            .client()
            .get_project(params.0.id)
            .await
            .map_err(map_client_error)?;

        let mut text = format::project(&project);
        if !project.description.is_empty() {
            text.push_str(&format!("\n{}", project.description));
        }
        if let Some(views) = project.views.as_deref().filter(|v| !v.is_empty()) {
            text.push_str("\nViews:");
            for view in views {
                text.push_str(&format!("\n  {}", format::view(view)));
            }
        }
        text_result(text)
    }

    #[tool(
        name = "vikunja_create_project",
        description = "Create a new project in Vikunja"
    )]
    pub async fn create_project(
        &self,
        params: Parameters<CreateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        check_title(&params.title)?;

        let data = CreateProject {
            title: params.title,
            description: params.description,
            parent_project_id: params.parent_project_id,
            hex_color: params.hex_color,
        };
        let project = self
            .client()
            .create_project(&data)
            .await
            .map_err(map_client_error)?;

        info!(project_id = project.id, "created project");
        text_result(format!(
            "Created project [{}] \"{}\"",
            project.id, project.title
        ))
    }

    #[tool(
        name = "vikunja_update_project",
        description = "Update an existing project in Vikunja. Only the supplied fields are changed."
    )]
    pub async fn update_project(
        &self,
        params: Parameters<UpdateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let data = UpdateProject {
            title: params.title,
            description: params.description,
            is_archived: params.is_archived,
            hex_color: params.hex_color,
            parent_project_id: params.parent_project_id,
        };
        let project = self
            .client()
            .update_project(params.id, &data)
            .await
            .map_err(map_client_error)?;

        info!(project_id = project.id, "updated project");
        text_result(format!(
            "Updated project [{}] \"{}\"",
            project.id, project.title
        ))
    }

    #[tool(
        name = "vikunja_delete_project",
        description = "Delete a project and all its tasks in Vikunja"
    )]
    pub async fn delete_project(
        &self,
        params: Parameters<DeleteProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        self.client()
            .delete_project(params.0.id)
            .await
            .map_err(map_client_error)?;

        info!(project_id = params.0.id, "deleted project");
        text_result(format!("Deleted project #{}", params.0.id))
    }
}

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;
