use reqwest::Method;
use serde::Serialize;

use super::models::Task;
use super::{ClientResult, ListParams, VikunjaClient};

#[derive(Debug, Default, Clone, Serialize)]
pub struct CreateTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex_color: Option<String>,
}

/// Partial update: only fields that are `Some` are sent.
#[derive(Debug, Default, Clone, Serialize)]
pub struct UpdateTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
}

impl VikunjaClient {
    /// Tasks across every project the token can see.
    pub async fn list_tasks(&self, params: &ListParams) -> ClientResult<Vec<Task>> {
        self.get_with_query("/tasks", params).await
    }

    /// Tasks of a project as seen through one of its views.
    pub async fn list_project_tasks(
        &self,
        project_id: i64,
        view_id: i64,
        params: &ListParams,
    ) -> ClientResult<Vec<Task>> {
        self.get_with_query(
            &format!("/projects/{}/views/{}/tasks", project_id, view_id),
            params,
        )
        .await
    }

    pub async fn get_task(&self, id: i64) -> ClientResult<Task> {
        self.get(&format!("/tasks/{}", id)).await
    }

    /// The task document exactly as the server returned it.
    pub async fn get_task_json(&self, id: i64) -> ClientResult<serde_json::Value> {
        self.get(&format!("/tasks/{}", id)).await
    }

    pub async fn create_task(&self, project_id: i64, data: &CreateTask) -> ClientResult<Task> {
        self.request(
            Method::PUT,
            &format!("/projects/{}/tasks", project_id),
            Some(data),
        )
        .await
    }

    pub async fn update_task(&self, id: i64, data: &UpdateTask) -> ClientResult<Task> {
        self.request(Method::POST, &format!("/tasks/{}", id), Some(data))
            .await
    }

    pub async fn delete_task(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/tasks/{}", id)).await
    }
}
