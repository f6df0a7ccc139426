use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Row from the `users` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
    pub staff_status: bool,
    pub hashed_password: Option<String>,
    pub verification_token: Option<String>,
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, created_at, updated_at, email, first_name, last_name,
               is_active, is_superuser, staff_status, hashed_password, verification_token
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, created_at, updated_at, email, first_name, last_name,
               is_active, is_superuser, staff_status, hashed_password, verification_token
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, created_at, updated_at, email, first_name, last_name,
               is_active, is_superuser, staff_status, hashed_password, verification_token
        FROM users
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn insert(
    pool: &PgPool,
    email: &str,
    first_name: Option<&str>,
    last_name: Option<&str>,
    hashed_password: &str,
    is_superuser: bool,
) -> Result<UserRow, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (email, first_name, last_name, is_active, is_superuser, staff_status, hashed_password)
        VALUES ($1, $2, $3, TRUE, $4, FALSE, $5)
        RETURNING id, created_at, updated_at, email, first_name, last_name,
                  is_active, is_superuser, staff_status, hashed_password, verification_token
        "#,
    )
    .bind(email)
    .bind(first_name)
    .bind(last_name)
    .bind(is_superuser)
    .bind(hashed_password)
    .fetch_one(pool)
    .await
}

/// Update profile fields that were provided, leaving the rest untouched.
pub async fn update(
    pool: &PgPool,
    id: i64,
    email: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<UserRow, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE users
        SET email = COALESCE($2, email),
            first_name = COALESCE($3, first_name),
            last_name = COALESCE($4, last_name),
            updated_at = now()
        WHERE id = $1
        RETURNING id, created_at, updated_at, email, first_name, last_name,
                  is_active, is_superuser, staff_status, hashed_password, verification_token
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(first_name)
    .bind(last_name)
    .fetch_one(pool)
    .await
}

pub async fn set_password(pool: &PgPool, id: i64, hashed_password: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET hashed_password = $2, updated_at = now() WHERE id = $1")
        .bind(id)
        .bind(hashed_password)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
