use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Result};
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // argon2 hash, not exposed in JSON
    pub created_at: OffsetDateTime,
}

impl User {
    /// Find a user by (already lowercased) email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Create a new user with hashed password.
    pub async fn create(db: &PgPool, name: &str, email: &str, password_hash: &str) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }
}

/// Add a token's `jti` to the revocation list. The entry only needs to live
/// until the token itself expires.
pub async fn revoke_token(db: &PgPool, token_id: Uuid, expires_at: OffsetDateTime) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO revoked_tokens (token_id, expires_at)
        VALUES ($1, $2)
        ON CONFLICT (token_id) DO NOTHING
        "#,
    )
    .bind(token_id)
    .bind(expires_at)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn is_token_revoked(db: &PgPool, token_id: Uuid) -> Result<bool> {
    sqlx::query_scalar::<_, bool>(
        r#"SELECT EXISTS(SELECT 1 FROM revoked_tokens WHERE token_id = $1)"#,
    )
    .bind(token_id)
    .fetch_one(db)
    .await
}

/// Drop revocation entries whose tokens have expired anyway.
pub async fn purge_expired_revocations(db: &PgPool) -> Result<u64> {
    let result = sqlx::query(r#"DELETE FROM revoked_tokens WHERE expires_at < now()"#)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}
