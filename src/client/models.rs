//! Mirrors of the Vikunja resources.
//!
//! Every field carries `#[serde(default)]` semantics so partial or `null`
//! payloads decode, and every type is `Default` so an empty (204) response
//! yields an empty value instead of a decode error.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub created: Option<String>,
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub identifier: String,
    pub hex_color: String,
    pub parent_project_id: i64,
    pub is_archived: bool,
    pub is_favorite: bool,
    pub position: f64,
    pub owner: Option<User>,
    pub views: Option<Vec<View>>,
    pub created: Option<String>,
    pub updated: Option<String>,
}

/// Presentation kind of a project view.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    #[default]
    List,
    Gantt,
    Table,
    Kanban,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::List => "list",
            ViewKind::Gantt => "gantt",
            ViewKind::Table => "table",
            ViewKind::Kanban => "kanban",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a kanban view assigns tasks to buckets.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum BucketConfigurationMode {
    #[default]
    None,
    Manual,
    Filter,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct View {
    pub id: i64,
    pub title: String,
    pub project_id: i64,
    pub view_kind: ViewKind,
    pub position: f64,
    pub filter: Option<String>,
    pub bucket_configuration_mode: Option<BucketConfigurationMode>,
    pub default_bucket_id: i64,
    pub done_bucket_id: i64,
    pub created: Option<String>,
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bucket {
    pub id: i64,
    pub title: String,
    pub project_view_id: i64,
    pub position: f64,
    pub limit: i64,
    pub count: i64,
    pub created_by: Option<User>,
    pub created: Option<String>,
    pub updated: Option<String>,
}

/// Result of moving a task into a bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskBucket {
    pub task_id: i64,
    pub bucket_id: i64,
    pub project_view_id: i64,
    pub task_done: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub hex_color: String,
    pub created_by: Option<User>,
    pub created: Option<String>,
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub done: bool,
    pub done_at: Option<String>,
    pub due_date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub priority: i64,
    pub percent_done: f64,
    pub hex_color: String,
    pub identifier: String,
    pub index: i64,
    pub position: f64,
    pub project_id: i64,
    pub bucket_id: i64,
    pub repeat_after: i64,
    pub is_favorite: bool,
    pub labels: Option<Vec<Label>>,
    pub assignees: Option<Vec<User>>,
    /// Related tasks keyed by relation kind name.
    pub related_tasks: Option<BTreeMap<String, Vec<Task>>>,
    pub attachments: Option<Vec<Attachment>>,
    pub comment_count: Option<i64>,
    pub created_by: Option<User>,
    pub created: Option<String>,
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: i64,
    pub comment: String,
    pub author: Option<User>,
    pub created: Option<String>,
    pub updated: Option<String>,
}

/// Fixed vocabulary of task-to-task relations.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Subtask,
    ParentTask,
    #[default]
    Related,
    DuplicateOf,
    Duplicates,
    Blocking,
    Blocked,
    Precedes,
    Follows,
    CopiedFrom,
    CopiedTo,
}

impl RelationKind {
    pub const ALL: [RelationKind; 11] = [
        RelationKind::Subtask,
        RelationKind::ParentTask,
        RelationKind::Related,
        RelationKind::DuplicateOf,
        RelationKind::Duplicates,
        RelationKind::Blocking,
        RelationKind::Blocked,
        RelationKind::Precedes,
        RelationKind::Follows,
        RelationKind::CopiedFrom,
        RelationKind::CopiedTo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Subtask => "subtask",
            RelationKind::ParentTask => "parenttask",
            RelationKind::Related => "related",
            RelationKind::DuplicateOf => "duplicateof",
            RelationKind::Duplicates => "duplicates",
            RelationKind::Blocking => "blocking",
            RelationKind::Blocked => "blocked",
            RelationKind::Precedes => "precedes",
            RelationKind::Follows => "follows",
            RelationKind::CopiedFrom => "copiedfrom",
            RelationKind::CopiedTo => "copiedto",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = RelationKind::ALL.iter().map(|k| k.as_str()).collect();
                format!(
                    "Invalid relation kind '{}'. Valid values: {}",
                    s,
                    valid.join(", ")
                )
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskRelation {
    pub task_id: i64,
    pub other_task_id: i64,
    pub relation_kind: RelationKind,
    pub created_by: Option<User>,
    pub created: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInfo {
    pub id: i64,
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub created: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    pub id: i64,
    pub task_id: i64,
    pub created_by: Option<User>,
    pub file: FileInfo,
    pub created: Option<String>,
}

/// Body of the attachment upload response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UploadResponse {
    pub success: Option<Vec<Attachment>>,
    pub errors: Option<Vec<serde_json::Value>>,
}

/// Generic `{"message": "..."}` acknowledgement returned by deletions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub message: String,
}
