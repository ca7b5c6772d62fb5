use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Result};
use time::OffsetDateTime;
use uuid::Uuid;

/// Task record in the database. Every statement below carries the owner in
/// its WHERE clause, so a task never crosses user boundaries.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: OffsetDateTime,
}

impl Task {
    pub async fn list_by_owner(db: &PgPool, user_id: Uuid) -> Result<Vec<Task>> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, title, description, completed, created_at
            FROM tasks
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    pub async fn insert(
        db: &PgPool,
        user_id: Uuid,
        title: &str,
        description: &str,
    ) -> Result<Task> {
        sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (user_id, title, description)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, title, description, completed, created_at
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(description)
        .fetch_one(db)
        .await
    }

    /// Partial update scoped to `(id, owner)` in a single statement; absent
    /// fields keep their stored value. Returns `None` when no owned row
    /// matched; callers cannot tell "missing" from "not yours".
    pub async fn update_scoped(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        title: Option<&str>,
        description: Option<&str>,
        completed: Option<bool>,
    ) -> Result<Option<Task>> {
        sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = COALESCE($3, title),
                description = COALESCE($4, description),
                completed = COALESCE($5, completed)
            WHERE id = $2 AND user_id = $1
            RETURNING id, user_id, title, description, completed, created_at
            "#,
        )
        .bind(user_id)
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(completed)
        .fetch_optional(db)
        .await
    }

    /// Delete scoped to `(id, owner)`; returns the removed row's prior state.
    pub async fn delete_scoped(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<Option<Task>> {
        sqlx::query_as::<_, Task>(
            r#"
            DELETE FROM tasks
            WHERE id = $2 AND user_id = $1
            RETURNING id, user_id, title, description, completed, created_at
            "#,
        )
        .bind(user_id)
        .bind(id)
        .fetch_optional(db)
        .await
    }
}
