//! Task tools.

use rmcp::{
    ErrorData as McpError,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::client::{CreateTask, ListParams, UpdateTask};
use crate::mcp::VikunjaServer;
use crate::mcp::format;
use crate::mcp::tools::{check_priority, check_title, map_client_error, text_result};

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListTasksParams {
    #[schemars(description = "Page number (default: 1)")]
    pub page: Option<u32>,
    #[schemars(description = "Tasks per page (default: 50)")]
    pub per_page: Option<u32>,
    #[schemars(description = "Search query string")]
    pub s: Option<String>,
    #[schemars(description = "Sort field (e.g., \"due_date\", \"created\", \"priority\")")]
    pub sort_by: Option<String>,
    #[schemars(description = "Sort order: \"asc\" or \"desc\"")]
    pub order_by: Option<String>,
    #[schemars(description = "Vikunja filter string (e.g., \"done = false\")")]
    pub filter: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListProjectTasksParams {
    #[schemars(description = "Project ID")]
    pub project_id: i64,
    #[schemars(description = "Page number")]
    pub page: Option<u32>,
    #[schemars(description = "Tasks per page")]
    pub per_page: Option<u32>,
    #[schemars(description = "Search query string")]
    pub s: Option<String>,
    #[schemars(description = "Vikunja filter string")]
    pub filter: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TaskIdParams {
    #[schemars(description = "Task ID")]
    pub id: i64,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    #[schemars(description = "Project ID to create the task in")]
    pub project_id: i64,
    #[schemars(description = "Task title")]
    pub title: String,
    #[schemars(description = "Task description (supports markdown)")]
    pub description: Option<String>,
    #[schemars(description = "Mark as completed")]
    pub done: Option<bool>,
    #[schemars(description = "Priority: 0=none, 1=low, 2=medium, 3=high, 4=urgent")]
    pub priority: Option<u8>,
    #[schemars(description = "Due date in ISO format (e.g., \"2026-03-15T00:00:00Z\")")]
    pub due_date: Option<String>,
    #[schemars(description = "Start date in ISO format")]
    pub start_date: Option<String>,
    #[schemars(description = "End date in ISO format")]
    pub end_date: Option<String>,
    #[schemars(description = "Hex color code")]
    pub hex_color: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    #[schemars(description = "Task ID")]
    pub id: i64,
    #[schemars(description = "New title")]
    pub title: Option<String>,
    #[schemars(description = "New description")]
    pub description: Option<String>,
    #[schemars(description = "Mark as done/undone")]
    pub done: Option<bool>,
    #[schemars(description = "Priority: 0=none, 1=low, 2=medium, 3=high, 4=urgent")]
    pub priority: Option<u8>,
    #[schemars(description = "Due date in ISO format")]
    pub due_date: Option<String>,
    #[schemars(description = "Start date in ISO format")]
    pub start_date: Option<String>,
    #[schemars(description = "End date in ISO format")]
    pub end_date: Option<String>,
    #[schemars(description = "Hex color code")]
    pub hex_color: Option<String>,
    #[schemars(description = "Move the task to another project")]
    pub project_id: Option<i64>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BulkTaskItem {
    #[schemars(description = "Task title")]
    pub title: String,
    #[schemars(description = "Task description")]
    pub description: Option<String>,
    #[schemars(description = "Mark as completed")]
    pub done: Option<bool>,
    #[schemars(description = "Priority (0-4)")]
    pub priority: Option<u8>,
    #[schemars(description = "Due date in ISO format")]
    pub due_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BulkCreateTasksParams {
    #[schemars(description = "Project ID to create tasks in")]
    pub project_id: i64,
    #[schemars(description = "Array of tasks to create")]
    pub tasks: Vec<BulkTaskItem>,
}

// =============================================================================
// Tool Implementations
// =============================================================================

pub(crate) fn router() -> ToolRouter<VikunjaServer> {
    VikunjaServer::task_router()
}

#[tool_router(router = task_router)]
impl VikunjaServer {
    #[tool(
        name = "vikunja_list_tasks",
        description = "List all tasks across all projects. Supports search and filtering."
    )]
    pub async fn list_tasks(
        &self,
        params: Parameters<ListTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let query = ListParams {
            page: params.page,
            per_page: params.per_page,
            s: params.s,
            sort_by: params.sort_by,
            order_by: params.order_by,
            filter: params.filter,
        };

        let tasks = self
            .client()
            .list_tasks(&query)
            .await
            .map_err(map_client_error)?;

        text_result(format::listing(
            &tasks,
            "task",
            "",
            "No tasks found.",
            format::task,
        ))
    }

    /// Tasks are always scoped to a view, so the project's first view is
    /// resolved before listing.
    #[tool(
        name = "vikunja_list_project_tasks",
        description = "List tasks within a specific project"
    )]
    pub async fn list_project_tasks(
        &self,
        params: Parameters<ListProjectTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let views = self
            .client()
            .list_views(params.project_id)
            .await
            .map_err(map_client_error)?;

        let Some(view) = views.first() else {
            return text_result("Project has no views.");
        };

        let query = ListParams {
            page: params.page,
            per_page: params.per_page,
            s: params.s,
            filter: params.filter,
            ..Default::default()
        };
        let tasks = self
            .client()
            .list_project_tasks(params.project_id, view.id, &query)
            .await
            .map_err(map_client_error)?;

        text_result(format::listing(
            &tasks,
            "task",
            &format!(" in project #{}", params.project_id),
            "No tasks in this project.",
            format::task,
        ))
    }

    #[tool(
        name = "vikunja_get_task",
        description = "Get detailed information about a specific task"
    )]
    pub async fn get_task(
        &self,
        params: Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let task = self
            .client()
            .get_task_json(params.0.id)
            .await
            .map_err(map_client_error)?;

        let text = serde_json::to_string_pretty(&task).map_err(|e| {
            McpError::internal_error(
                "serialization_error",
                Some(json!({"error": e.to_string()})),
            )
        })?;
        text_result(text)
    }

    #[tool(
        name = "vikunja_create_task",
        description = "Create a new task in a project"
    )]
    pub async fn create_task(
        &self,
        params: Parameters<CreateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        check_title(&params.title)?;
        check_priority(params.priority)?;

        let data = CreateTask {
            title: params.title,
            description: params.description,
            done: params.done,
            priority: params.priority,
            due_date: params.due_date,
            start_date: params.start_date,
            end_date: params.end_date,
            hex_color: params.hex_color,
        };
        let task = self
            .client()
            .create_task(params.project_id, &data)
            .await
            .map_err(map_client_error)?;

        info!(task_id = task.id, project_id = params.project_id, "created task");
        text_result(format!(
            "Created task [{}] \"{}\" in project #{}",
            task.id, task.title, params.project_id
        ))
    }

    #[tool(
        name = "vikunja_update_task",
        description = "Update an existing task. Only the supplied fields are changed."
    )]
    pub async fn update_task(
        &self,
        params: Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        check_priority(params.priority)?;
        if let Some(title) = params.title.as_deref() {
            check_title(title)?;
        }

        let data = UpdateTask {
            title: params.title,
            description: params.description,
            done: params.done,
            priority: params.priority,
            due_date: params.due_date,
            start_date: params.start_date,
            end_date: params.end_date,
            hex_color: params.hex_color,
            project_id: params.project_id,
        };
        let task = self
            .client()
            .update_task(params.id, &data)
            .await
            .map_err(map_client_error)?;

        info!(task_id = task.id, "updated task");
        text_result(format!("Updated task [{}] \"{}\"", task.id, task.title))
    }

    #[tool(name = "vikunja_complete_task", description = "Mark a task as done")]
    pub async fn complete_task(
        &self,
        params: Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let data = UpdateTask {
            done: Some(true),
            ..Default::default()
        };
        let task = self
            .client()
            .update_task(params.0.id, &data)
            .await
            .map_err(map_client_error)?;

        info!(task_id = task.id, "completed task");
        text_result(format!("Completed task [{}] \"{}\"", task.id, task.title))
    }

    #[tool(name = "vikunja_delete_task", description = "Delete a task")]
    pub async fn delete_task(
        &self,
        params: Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = params.0.id;
        self.client()
            .delete_task(id)
            .await
            .map_err(map_client_error)?;

        info!(task_id = id, "deleted task");
        text_result(format!("Deleted task #{}", id))
    }

    /// Creates one task at a time, in input order. Every item is validated
    /// before the first request; the first remote failure stops the batch and
    /// the error data lists what was already created.
    #[tool(
        name = "vikunja_bulk_create_tasks",
        description = "Create multiple tasks in a project at once"
    )]
    pub async fn bulk_create_tasks(
        &self,
        params: Parameters<BulkCreateTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let BulkCreateTasksParams { project_id, tasks } = params.0;
        for item in &tasks {
            check_title(&item.title)?;
            check_priority(item.priority)?;
        }

        let total = tasks.len();
        let mut created: Vec<String> = Vec::with_capacity(total);
        for item in tasks {
            let data = CreateTask {
                title: item.title,
                description: item.description,
                done: item.done,
                priority: item.priority,
                due_date: item.due_date,
                ..Default::default()
            };
            match self.client().create_task(project_id, &data).await {
                Ok(task) => created.push(format!("[{}] {}", task.id, task.title)),
                Err(err) => {
                    warn!(
                        project_id,
                        created = created.len(),
                        total,
                        error = %err,
                        "bulk task creation stopped"
                    );
                    let mut data = json!({ "created": created });
                    if let Some(status) = err.status() {
                        data["status"] = json!(status);
                    }
                    return Err(McpError::internal_error(err.to_string(), Some(data)));
                }
            }
        }

        info!(project_id, count = created.len(), "bulk created tasks");
        text_result(format!(
            "Created {} task(s) in project #{}:\n{}",
            created.len(),
            project_id,
            created.join("\n")
        ))
    }
}

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;
