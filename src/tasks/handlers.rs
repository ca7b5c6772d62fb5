use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::auth::extractors::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;
use crate::tasks::dto::{CreateTaskRequest, TaskResponse, UpdateTaskRequest};
use crate::tasks::repo::Task;

pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/:id", put(update_task).delete(delete_task))
}

/// Titles are stored trimmed and must survive the trim.
fn normalize_title(raw: &str) -> Result<String, ApiError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(ApiError::validation("Title is required"));
    }
    Ok(title.to_string())
}

#[instrument(skip(state))]
pub async fn list_tasks(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = Task::list_by_owner(&state.db, user_id).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn create_task(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let title = normalize_title(&payload.title)?;

    let task = Task::insert(&state.db, user_id, &title, &payload.description).await?;

    info!(user_id = %user_id, task_id = %task.id, "task created");
    Ok((StatusCode::CREATED, Json(task.into())))
}

#[instrument(skip(state, payload))]
pub async fn update_task(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    let title = payload
        .title
        .as_deref()
        .map(normalize_title)
        .transpose()?;

    let task = Task::update_scoped(
        &state.db,
        user_id,
        id,
        title.as_deref(),
        payload.description.as_deref(),
        payload.completed,
    )
    .await?
    .ok_or(ApiError::TaskNotFound)?;

    info!(user_id = %user_id, task_id = %task.id, "task updated");
    Ok(Json(task.into()))
}

#[instrument(skip(state))]
pub async fn delete_task(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = Task::delete_scoped(&state.db, user_id, id)
        .await?
        .ok_or(ApiError::TaskNotFound)?;

    info!(user_id = %user_id, task_id = %task.id, "task deleted");
    Ok(Json(task.into()))
}

#[cfg(test)]
mod title_tests {
    use super::*;

    #[test]
    fn rejects_empty_title() {
        assert!(normalize_title("").is_err());
    }

    #[test]
    fn rejects_whitespace_only_title() {
        assert!(normalize_title("   ").is_err());
        assert!(normalize_title("\t\n").is_err());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize_title("  Buy milk  ").unwrap(), "Buy milk");
    }

    #[test]
    fn accepts_plain_title() {
        assert_eq!(normalize_title("Buy milk").unwrap(), "Buy milk");
    }
}
