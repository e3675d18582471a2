//! Task relation tools.
//!
//! The relation kind is the shared [`RelationKind`] enum, so an unknown kind
//! fails parameter deserialization before any request is made.

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

use crate::client::models::{RelationKind, TaskRelation};
use crate::mcp::VikunjaServer;
use crate::mcp::format;
use crate::mcp::tools::{map_client_error, text_result};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListRelationsParams {
    #[schemars(description = "Task ID")]
    pub task_id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RelationParams {
    #[schemars(description = "Source task ID")]
    pub task_id: i64,
    #[schemars(description = "Target task ID")]
    pub other_task_id: i64,
    #[schemars(
        description = "Relation kind: subtask, parenttask, related, duplicateof, duplicates, blocking, blocked, precedes, follows, copiedfrom, copiedto"
    )]
    pub relation_kind: RelationKind,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateRelationParams {
    #[schemars(description = "Source task ID")]
    pub task_id: i64,
    #[schemars(description = "Target task ID")]
    pub other_task_id: i64,
    #[schemars(description = "Current relation kind")]
    pub relation_kind: RelationKind,
    #[schemars(description = "Relation kind to change it to")]
    pub new_relation_kind: RelationKind,
}

fn arrow(task_id: i64, kind: RelationKind, other_task_id: i64) -> String {
    format!("task #{} -[{}]-> task #{}", task_id, kind, other_task_id)
}

fn relation_line(r: &TaskRelation) -> String {
    arrow(r.task_id, r.relation_kind, r.other_task_id)
}

pub(crate) fn router() -> ToolRouter<VikunjaServer> {
    VikunjaServer::relation_router()
}

#[tool_router(router = relation_router)]
impl VikunjaServer {
    #[tool(
        name = "vikunja_list_relations",
        description = "List the relations of a task to other tasks"
    )]
    pub async fn list_relations(
        &self,
        params: Parameters<ListRelationsParams>,
    ) -> Result<CallToolResult, McpError> {
        let task_id = params.0.task_id;
        let relations = self
            .client()
            .list_relations(task_id)
            .await
            .map_err(map_client_error)?;

        text_result(format::listing(
            &relations,
            "relation",
            &format!(" on task #{}", task_id),
            "No relations on this task.",
            relation_line,
        ))
    }

    #[tool(
        name = "vikunja_create_relation",
        description = "Create a relation between two tasks (e.g., subtask, blocking, related)"
    )]
    pub async fn create_relation(
        &self,
        params: Parameters<RelationParams>,
    ) -> Result<CallToolResult, McpError> {
        let RelationParams {
            task_id,
            other_task_id,
            relation_kind,
        } = params.0;
        self.client()
            .create_relation(task_id, other_task_id, relation_kind)
            .await
            .map_err(map_client_error)?;

        info!(task_id, other_task_id, kind = %relation_kind, "created relation");
        text_result(format!(
            "Created relation: {}",
            arrow(task_id, relation_kind, other_task_id)
        ))
    }

    #[tool(
        name = "vikunja_update_relation",
        description = "Change the kind of an existing relation between two tasks"
    )]
    pub async fn update_relation(
        &self,
        params: Parameters<UpdateRelationParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateRelationParams {
            task_id,
            other_task_id,
            relation_kind,
            new_relation_kind,
        } = params.0;
        if relation_kind == new_relation_kind {
            return text_result(format!(
                "Relation unchanged: {}",
                arrow(task_id, relation_kind, other_task_id)
            ));
        }

        self.client()
            .update_relation(task_id, other_task_id, relation_kind, new_relation_kind)
            .await
            .map_err(map_client_error)?;

        info!(
            task_id,
            other_task_id,
            from = %relation_kind,
            to = %new_relation_kind,
            "updated relation"
        );
        text_result(format!(
            "Updated relation: {}",
            arrow(task_id, new_relation_kind, other_task_id)
        ))
    }

    #[tool(
        name = "vikunja_delete_relation",
        description = "Delete a relation between two tasks"
    )]
    pub async fn delete_relation(
        &self,
        params: Parameters<RelationParams>,
    ) -> Result<CallToolResult, McpError> {
        let RelationParams {
            task_id,
            other_task_id,
            relation_kind,
        } = params.0;
        self.client()
            .delete_relation(task_id, other_task_id, relation_kind)
            .await
            .map_err(map_client_error)?;

        info!(task_id, other_task_id, kind = %relation_kind, "deleted relation");
        text_result(format!(
            "Deleted relation: {}",
            arrow(task_id, relation_kind, other_task_id)
        ))
    }
}

#[cfg(test)]
#[path = "relations_test.rs"]
mod relations_test;
