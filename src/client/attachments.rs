use reqwest::Method;
use reqwest::multipart::{Form, Part};

use super::models::{Attachment, UploadResponse};
use super::{ClientError, ClientResult, VikunjaClient};

impl VikunjaClient {
    pub async fn list_attachments(&self, task_id: i64) -> ClientResult<Vec<Attachment>> {
        self.get(&format!("/tasks/{}/attachments", task_id)).await
    }

    /// Upload raw bytes as a multipart `files` field.
    pub async fn upload_attachment(
        &self,
        task_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
        mime_type: &str,
    ) -> ClientResult<Attachment> {
        let path = format!("/tasks/{}/attachments", task_id);
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|source| ClientError::Transport {
                url: format!("{}{}", self.api_url(), path),
                source,
            })?;
        let form = Form::new().part("files", part);

        let request = self.builder(Method::PUT, &path).multipart(form);
        let response: UploadResponse = self.send(request, &path).await?;

        if let Some(attachment) = response.success.and_then(|s| s.into_iter().next()) {
            return Ok(attachment);
        }
        let reason = response
            .errors
            .and_then(|errors| errors.into_iter().next())
            .map(|error| match error.get("message").and_then(|m| m.as_str()) {
                Some(message) => message.to_string(),
                None => error.to_string(),
            })
            .unwrap_or_else(|| "no attachment returned".to_string());
        Err(ClientError::UploadRejected {
            file_name: file_name.to_string(),
            reason,
        })
    }

    pub async fn delete_attachment(&self, task_id: i64, attachment_id: i64) -> ClientResult<()> {
        self.delete(&format!("/tasks/{}/attachments/{}", task_id, attachment_id))
            .await
    }
}
