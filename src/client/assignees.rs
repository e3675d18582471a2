use reqwest::Method;
use serde::Serialize;

use super::models::User;
use super::{ClientResult, VikunjaClient};

#[derive(Serialize)]
struct Assignee {
    user_id: i64,
}

impl VikunjaClient {
    pub async fn list_assignees(&self, task_id: i64) -> ClientResult<Vec<User>> {
        self.get(&format!("/tasks/{}/assignees", task_id)).await
    }

    pub async fn assign_user(&self, task_id: i64, user_id: i64) -> ClientResult<()> {
        let _: serde_json::Value = self
            .request(
                Method::PUT,
                &format!("/tasks/{}/assignees", task_id),
                Some(&Assignee { user_id }),
            )
            .await?;
        Ok(())
    }

    pub async fn unassign_user(&self, task_id: i64, user_id: i64) -> ClientResult<()> {
        self.delete(&format!("/tasks/{}/assignees/{}", task_id, user_id))
            .await
    }
}
