use reqwest::Method;
use serde::Serialize;

use super::models::Project;
use super::{ClientResult, VikunjaClient};

#[derive(Debug, Default, Clone, Serialize)]
pub struct ProjectListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct CreateProject {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex_color: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct UpdateProject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_project_id: Option<i64>,
}

impl VikunjaClient {
    pub async fn list_projects(&self, params: &ProjectListParams) -> ClientResult<Vec<Project>> {
        self.get_with_query("/projects", params).await
    }

    pub async fn get_project(&self, id: i64) -> ClientResult<Project> {
        self.get(&format!("/projects/{}", id)).await
    }

    pub async fn create_project(&self, data: &CreateProject) -> ClientResult<Project> {
        self.request(Method::PUT, "/projects", Some(data)).await
    }

    pub async fn update_project(&self, id: i64, data: &UpdateProject) -> ClientResult<Project> {
        self.request(Method::POST, &format!("/projects/{}", id), Some(data))
            .await
    }

    /// Deletes the project; the server cascades to its tasks.
    pub async fn delete_project(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/projects/{}", id)).await
    }
}
