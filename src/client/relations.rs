use std::str::FromStr;

use reqwest::Method;
use serde::Serialize;

use super::models::{RelationKind, TaskRelation};
use super::{ClientResult, VikunjaClient};

#[derive(Serialize)]
struct NewRelation {
    task_id: i64,
    other_task_id: i64,
    relation_kind: RelationKind,
}

impl VikunjaClient {
    /// Relations are read from the task's `related_tasks` map; there is no
    /// dedicated listing endpoint. Kinds this client does not know are skipped.
    pub async fn list_relations(&self, task_id: i64) -> ClientResult<Vec<TaskRelation>> {
        let task = self.get_task(task_id).await?;
        let relations = task
            .related_tasks
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(kind, tasks)| {
                RelationKind::from_str(&kind).ok().map(|kind| (kind, tasks))
            })
            .flat_map(|(kind, tasks)| {
                tasks.into_iter().map(move |other| TaskRelation {
                    task_id,
                    other_task_id: other.id,
                    relation_kind: kind,
                    ..Default::default()
                })
            })
            .collect();
        Ok(relations)
    }

    pub async fn create_relation(
        &self,
        task_id: i64,
        other_task_id: i64,
        kind: RelationKind,
    ) -> ClientResult<TaskRelation> {
        let body = NewRelation {
            task_id,
            other_task_id,
            relation_kind: kind,
        };
        self.request(
            Method::PUT,
            &format!("/tasks/{}/relations", task_id),
            Some(&body),
        )
        .await
    }

    /// Relations are immutable remotely, so a kind change is a delete
    /// followed by a create.
    pub async fn update_relation(
        &self,
        task_id: i64,
        other_task_id: i64,
        from: RelationKind,
        to: RelationKind,
    ) -> ClientResult<TaskRelation> {
        self.delete_relation(task_id, other_task_id, from).await?;
        self.create_relation(task_id, other_task_id, to).await
    }

    pub async fn delete_relation(
        &self,
        task_id: i64,
        other_task_id: i64,
        kind: RelationKind,
    ) -> ClientResult<()> {
        self.delete(&format!(
            "/tasks/{}/relations/{}/{}",
            task_id, kind, other_task_id
        ))
        .await
    }
}
