use reqwest::Method;
use serde::Serialize;

use super::models::{Bucket, TaskBucket};
use super::{ClientError, ClientResult, VikunjaClient};

#[derive(Debug, Default, Clone, Serialize)]
pub struct CreateBucket {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct UpdateBucket {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
}

#[derive(Serialize)]
struct MoveTask {
    task_id: i64,
}

fn buckets_path(project_id: i64, view_id: i64) -> String {
    format!("/projects/{}/views/{}/buckets", project_id, view_id)
}

impl VikunjaClient {
    pub async fn list_buckets(&self, project_id: i64, view_id: i64) -> ClientResult<Vec<Bucket>> {
        self.get(&buckets_path(project_id, view_id)).await
    }

    /// Vikunja has no single-bucket endpoint; this filters the view's listing.
    pub async fn get_bucket(
        &self,
        project_id: i64,
        view_id: i64,
        bucket_id: i64,
    ) -> ClientResult<Bucket> {
        self.list_buckets(project_id, view_id)
            .await?
            .into_iter()
            .find(|bucket| bucket.id == bucket_id)
            .ok_or(ClientError::NotFound {
                resource: "bucket",
                id: bucket_id,
            })
    }

    pub async fn create_bucket(
        &self,
        project_id: i64,
        view_id: i64,
        data: &CreateBucket,
    ) -> ClientResult<Bucket> {
        self.request(Method::PUT, &buckets_path(project_id, view_id), Some(data))
            .await
    }

    pub async fn update_bucket(
        &self,
        project_id: i64,
        view_id: i64,
        bucket_id: i64,
        data: &UpdateBucket,
    ) -> ClientResult<Bucket> {
        let path = format!("{}/{}", buckets_path(project_id, view_id), bucket_id);
        self.request(Method::POST, &path, Some(data)).await
    }

    pub async fn delete_bucket(
        &self,
        project_id: i64,
        view_id: i64,
        bucket_id: i64,
    ) -> ClientResult<()> {
        self.delete(&format!("{}/{}", buckets_path(project_id, view_id), bucket_id))
            .await
    }

    pub async fn move_task_to_bucket(
        &self,
        project_id: i64,
        view_id: i64,
        bucket_id: i64,
        task_id: i64,
    ) -> ClientResult<TaskBucket> {
        let path = format!("{}/{}/tasks", buckets_path(project_id, view_id), bucket_id);
        self.request(Method::POST, &path, Some(&MoveTask { task_id }))
            .await
    }
}
