use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Row from the `instagram` table. One row per successful scrape.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InstagramRow {
    pub id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub user_id: i64,
    pub account_username: Option<String>,
    pub photo_urls: Option<serde_json::Value>,
}

pub async fn insert(
    pool: &PgPool,
    user_id: i64,
    account_username: &str,
    photo_urls: &[String],
) -> Result<InstagramRow, sqlx::Error> {
    sqlx::query_as::<_, InstagramRow>(
        r#"
        INSERT INTO instagram (user_id, account_username, photo_urls)
        VALUES ($1, $2, $3)
        RETURNING id, created_at, updated_at, user_id, account_username, photo_urls
        "#,
    )
    .bind(user_id)
    .bind(account_username)
    .bind(serde_json::json!(photo_urls))
    .fetch_one(pool)
    .await
}
