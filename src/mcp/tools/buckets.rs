//! Kanban bucket tools.

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

use crate::client::{CreateBucket, UpdateBucket};
use crate::mcp::VikunjaServer;
use crate::mcp::format;
use crate::mcp::tools::{check_title, map_client_error, text_result};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListBucketsParams {
    #[schemars(description = "Project ID")]
    pub project_id: i64,
    #[schemars(description = "Kanban view ID")]
    pub view_id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateBucketParams {
    #[schemars(description = "Project ID")]
    pub project_id: i64,
    #[schemars(description = "Kanban view ID")]
    pub view_id: i64,
    #[schemars(description = "Bucket title")]
    pub title: String,
    #[schemars(description = "Maximum number of tasks (0 = no limit)")]
    pub limit: Option<i64>,
    #[schemars(description = "Sort position")]
    pub position: Option<f64>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateBucketParams {
    #[schemars(description = "Project ID")]
    pub project_id: i64,
    #[schemars(description = "Kanban view ID")]
    pub view_id: i64,
    #[schemars(description = "Bucket ID")]
    pub bucket_id: i64,
    #[schemars(description = "New title")]
    pub title: Option<String>,
    #[schemars(description = "New task limit (0 = no limit)")]
    pub limit: Option<i64>,
    #[schemars(description = "New sort position")]
    pub position: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteBucketParams {
    #[schemars(description = "Project ID")]
    pub project_id: i64,
    #[schemars(description = "Kanban view ID")]
    pub view_id: i64,
    #[schemars(description = "Bucket ID to delete")]
    pub bucket_id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MoveTaskParams {
    #[schemars(description = "Project ID")]
    pub project_id: i64,
    #[schemars(description = "Kanban view ID")]
    pub view_id: i64,
    #[schemars(description = "Target bucket ID")]
    pub bucket_id: i64,
    #[schemars(description = "Task ID to move")]
    pub task_id: i64,
}

pub(crate) fn router() -> ToolRouter<VikunjaServer> {
    VikunjaServer::bucket_router()
}

#[tool_router(router = bucket_router)]
impl VikunjaServer {
    #[tool(
        name = "vikunja_list_buckets",
        description = "List the buckets (columns) of a kanban view"
    )]
    pub async fn list_buckets(
        &self,
        params: Parameters<ListBucketsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ListBucketsParams {
            project_id,
            view_id,
        } = params.0;
        let buckets = self
            .client()
            .list_buckets(project_id, view_id)
            .await
            .map_err(map_client_error)?;

        text_result(format::listing(
            &buckets,
            "bucket",
            &format!(" in view #{}", view_id),
            "No buckets found in this view.",
            format::bucket,
        ))
    }

    #[tool(
        name = "vikunja_create_bucket",
        description = "Create a new bucket in a kanban view"
    )]
    pub async fn create_bucket(
        &self,
        params: Parameters<CreateBucketParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        check_title(&params.title)?;

        let data = CreateBucket {
            title: params.title,
            limit: params.limit,
            position: params.position,
        };
        let bucket = self
            .client()
            .create_bucket(params.project_id, params.view_id, &data)
            .await
            .map_err(map_client_error)?;

        info!(view_id = params.view_id, bucket_id = bucket.id, "created bucket");
        text_result(format!(
            "Created bucket [{}] \"{}\" in view #{}",
            bucket.id, bucket.title, params.view_id
        ))
    }

    #[tool(
        name = "vikunja_update_bucket",
        description = "Update a kanban bucket. Only the supplied fields are changed."
    )]
    pub async fn update_bucket(
        &self,
        params: Parameters<UpdateBucketParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let data = UpdateBucket {
            title: params.title,
            limit: params.limit,
            position: params.position,
        };
        let bucket = self
            .client()
            .update_bucket(params.project_id, params.view_id, params.bucket_id, &data)
            .await
            .map_err(map_client_error)?;

        info!(bucket_id = bucket.id, "updated bucket");
        text_result(format!(
            "Updated bucket [{}] \"{}\"",
            bucket.id, bucket.title
        ))
    }

    #[tool(
        name = "vikunja_delete_bucket",
        description = "Delete a kanban bucket. Its tasks move to the default bucket."
    )]
    pub async fn delete_bucket(
        &self,
        params: Parameters<DeleteBucketParams>,
    ) -> Result<CallToolResult, McpError> {
        let DeleteBucketParams {
            project_id,
            view_id,
            bucket_id,
        } = params.0;
        self.client()
            .delete_bucket(project_id, view_id, bucket_id)
            .await
            .map_err(map_client_error)?;

        info!(view_id, bucket_id, "deleted bucket");
        text_result(format!(
            "Deleted bucket #{} from view #{}",
            bucket_id, view_id
        ))
    }

    #[tool(
        name = "vikunja_move_task_to_bucket",
        description = "Move a task into a bucket of a kanban view"
    )]
    pub async fn move_task_to_bucket(
        &self,
        params: Parameters<MoveTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let MoveTaskParams {
            project_id,
            view_id,
            bucket_id,
            task_id,
        } = params.0;
        let moved = self
            .client()
            .move_task_to_bucket(project_id, view_id, bucket_id, task_id)
            .await
            .map_err(map_client_error)?;

        // An empty acknowledgement still means the move happened.
        let task_id = if moved.task_id > 0 { moved.task_id } else { task_id };
        let bucket_id = if moved.bucket_id > 0 {
            moved.bucket_id
        } else {
            bucket_id
        };

        info!(task_id, bucket_id, view_id, "moved task");
        let mut text = format!(
            "Moved task #{} to bucket #{} in view #{}",
            task_id, bucket_id, view_id
        );
        if moved.task_done {
            text.push_str(" (task is now done)");
        }
        text_result(text)
    }
}

#[cfg(test)]
#[path = "buckets_test.rs"]
mod buckets_test;
