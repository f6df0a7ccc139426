//! Postgres access: schema setup plus per-table query modules.

use sqlx::PgPool;

pub mod instagram;
pub mod users;

/// Create the tables this service needs if they are not present yet.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id                 BIGSERIAL     PRIMARY KEY,
            created_at         TIMESTAMPTZ   DEFAULT now(),
            updated_at         TIMESTAMPTZ,
            email              VARCHAR(320)  NOT NULL,
            first_name         VARCHAR(100),
            last_name          VARCHAR(100),
            is_active          BOOLEAN       NOT NULL DEFAULT TRUE,
            is_superuser       BOOLEAN       NOT NULL DEFAULT FALSE,
            staff_status       BOOLEAN       NOT NULL DEFAULT FALSE,
            hashed_password    VARCHAR(1024),
            verification_token VARCHAR(500)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS ix_users_email ON users (email)")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS instagram (
            id               BIGSERIAL    PRIMARY KEY,
            created_at       TIMESTAMPTZ  DEFAULT now(),
            updated_at       TIMESTAMPTZ,
            user_id          BIGINT       NOT NULL REFERENCES users (id) ON DELETE CASCADE,
            account_username VARCHAR(100),
            photo_urls       JSONB
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
