use reqwest::Method;
use serde::Serialize;

use super::models::Comment;
use super::{ClientResult, VikunjaClient};

#[derive(Serialize)]
struct CommentBody<'a> {
    comment: &'a str,
}

impl VikunjaClient {
    pub async fn list_comments(&self, task_id: i64) -> ClientResult<Vec<Comment>> {
        self.get(&format!("/tasks/{}/comments", task_id)).await
    }

    pub async fn create_comment(&self, task_id: i64, comment: &str) -> ClientResult<Comment> {
        self.request(
            Method::PUT,
            &format!("/tasks/{}/comments", task_id),
            Some(&CommentBody { comment }),
        )
        .await
    }

    pub async fn update_comment(
        &self,
        task_id: i64,
        comment_id: i64,
        comment: &str,
    ) -> ClientResult<Comment> {
        self.request(
            Method::POST,
            &format!("/tasks/{}/comments/{}", task_id, comment_id),
            Some(&CommentBody { comment }),
        )
        .await
    }

    pub async fn delete_comment(&self, task_id: i64, comment_id: i64) -> ClientResult<()> {
        self.delete(&format!("/tasks/{}/comments/{}", task_id, comment_id))
            .await
    }
}
