use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("{0} must be {1}")]
    Invalid(&'static str, &'static str),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // Identity
    pub app_name: String,
    pub admin_email: String,

    // Auth
    pub secret_key: String,
    pub access_token_expire_minutes: i64,
    pub refresh_token_expire_days: i64,

    // Database
    pub database_url: Option<String>,
    pub db_host: String,
    pub db_port: u16,
    pub db_database: String,
    pub db_username: String,
    pub db_password: String,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl AppConfig {
    /// Load configuration from the environment, reading a `.env` file first
    /// when one exists. `SECRET_KEY` is the only variable without a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            app_name: env_or("APP_NAME", "Glam Migration"),
            admin_email: env_or("ADMIN_EMAIL", "admin@admin.com"),
            secret_key: required_env("SECRET_KEY")?,
            access_token_expire_minutes: parse_env("ACCESS_TOKEN_EXPIRE_MINUTES", "36000")?,
            refresh_token_expire_days: parse_env("REFRESH_TOKEN_EXPIRE_DAYS", "30")?,
            database_url: env::var("DATABASE_URL").ok(),
            db_host: env_or("DB_HOST", "localhost"),
            db_port: parse_env("DB_PORT", "5432")?,
            db_database: env_or("DB_DATABASE", "glam"),
            db_username: env_or("DB_USERNAME", "glam_user"),
            db_password: env_or("DB_PASSWORD", "postgres"),
            web_host: env_or("WEB_HOST", "0.0.0.0"),
            web_port: parse_env("WEB_PORT", "8000")?,
        })
    }

    /// Postgres connection string. `DATABASE_URL` wins over the DB_* parts.
    pub fn db_url(&self) -> String {
        match &self.database_url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.db_username, self.db_password, self.db_host, self.db_port, self.db_database
            ),
        }
    }
}

fn required_env(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: std::str::FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError> {
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| ConfigError::Invalid(key, "a number"))
}
