use reqwest::Method;
use serde::Serialize;

use super::models::Label;
use super::{ClientResult, ListParams, VikunjaClient};

#[derive(Debug, Default, Clone, Serialize)]
pub struct CreateLabel {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct UpdateLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Serialize)]
struct LabelRef {
    label_id: i64,
}

impl VikunjaClient {
    pub async fn list_labels(&self, params: &ListParams) -> ClientResult<Vec<Label>> {
        self.get_with_query("/labels", params).await
    }

    pub async fn get_label(&self, id: i64) -> ClientResult<Label> {
        self.get(&format!("/labels/{}", id)).await
    }

    pub async fn create_label(&self, data: &CreateLabel) -> ClientResult<Label> {
        self.request(Method::PUT, "/labels", Some(data)).await
    }

    pub async fn update_label(&self, id: i64, data: &UpdateLabel) -> ClientResult<Label> {
        self.request(Method::POST, &format!("/labels/{}", id), Some(data))
            .await
    }

    pub async fn delete_label(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/labels/{}", id)).await
    }

    pub async fn add_label_to_task(&self, task_id: i64, label_id: i64) -> ClientResult<Label> {
        self.request(
            Method::PUT,
            &format!("/tasks/{}/labels", task_id),
            Some(&LabelRef { label_id }),
        )
        .await
    }

    pub async fn remove_label_from_task(&self, task_id: i64, label_id: i64) -> ClientResult<()> {
        self.delete(&format!("/tasks/{}/labels/{}", task_id, label_id))
            .await
    }
}
