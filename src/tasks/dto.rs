use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::tasks::repo::Task;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Allow-list of updatable fields. Anything else in the body, including any
/// attempt at owner reassignment, is dropped during deserialization.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub completed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Task> for TaskResponse {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            completed: t.completed,
            created_at: t.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_description_defaults_to_empty() {
        let req: CreateTaskRequest = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();
        assert_eq!(req.title, "Buy milk");
        assert_eq!(req.description, "");
    }

    #[test]
    fn update_fields_are_optional() {
        let req: UpdateTaskRequest = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        assert_eq!(req.completed, Some(true));
        assert!(req.title.is_none());
        assert!(req.description.is_none());
    }

    #[test]
    fn update_ignores_owner_fields() {
        let req: UpdateTaskRequest = serde_json::from_str(
            r#"{"completed":false,"user_id":"6b9d1b6e-0000-0000-0000-000000000000","owner":"x"}"#,
        )
        .unwrap();
        assert_eq!(req.completed, Some(false));
        assert!(req.title.is_none());
    }

    #[test]
    fn task_response_excludes_owner() {
        let task = Task {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Write spec".into(),
            description: "".into(),
            completed: false,
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_string(&TaskResponse::from(task)).unwrap();
        assert!(json.contains("Write spec"));
        assert!(json.contains("\"completed\":false"));
        assert!(!json.contains("user_id"));
    }
}
