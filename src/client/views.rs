use reqwest::Method;
use serde::Serialize;

use super::models::{BucketConfigurationMode, View, ViewKind};
use super::{ClientResult, VikunjaClient};

#[derive(Debug, Default, Clone, Serialize)]
pub struct CreateView {
    pub title: String,
    pub view_kind: ViewKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_configuration_mode: Option<BucketConfigurationMode>,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct UpdateView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_kind: Option<ViewKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_configuration_mode: Option<BucketConfigurationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_bucket_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done_bucket_id: Option<i64>,
}

impl VikunjaClient {
    pub async fn list_views(&self, project_id: i64) -> ClientResult<Vec<View>> {
        self.get(&format!("/projects/{}/views", project_id)).await
    }

    pub async fn get_view(&self, project_id: i64, view_id: i64) -> ClientResult<View> {
        self.get(&format!("/projects/{}/views/{}", project_id, view_id))
            .await
    }

    pub async fn create_view(&self, project_id: i64, data: &CreateView) -> ClientResult<View> {
        self.request(
            Method::PUT,
            &format!("/projects/{}/views", project_id),
            Some(data),
        )
        .await
    }

    pub async fn update_view(
        &self,
        project_id: i64,
        view_id: i64,
        data: &UpdateView,
    ) -> ClientResult<View> {
        self.request(
            Method::POST,
            &format!("/projects/{}/views/{}", project_id, view_id),
            Some(data),
        )
        .await
    }

    pub async fn delete_view(&self, project_id: i64, view_id: i64) -> ClientResult<()> {
        self.delete(&format!("/projects/{}/views/{}", project_id, view_id))
            .await
    }
}
