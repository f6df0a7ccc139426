//! Creates a superuser account from the command line.

use anyhow::{bail, Result};
use clap::Parser;
use sqlx::postgres::PgPoolOptions;

use glam_api::{db, password};
use glam_common::AppConfig;

#[derive(Parser)]
#[command(name = "createuser", about = "Create a Glam superuser account")]
struct Cli {
    /// Email address for the new account
    #[arg(long)]
    email: String,
    /// Plaintext password, checked against the account password rule
    #[arg(long)]
    password: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.db_url())
        .await?;
    db::run_migrations(&pool).await?;

    if db::users::find_by_email(&pool, &cli.email).await?.is_some() {
        bail!("User already exists");
    }
    if let Err(msg) = password::validate(&cli.password) {
        bail!("{msg}");
    }

    let hashed = password::hash(&cli.password)?;
    db::users::insert(&pool, &cli.email, None, None, &hashed, true).await?;

    println!("User was successfully created");
    Ok(())
}
