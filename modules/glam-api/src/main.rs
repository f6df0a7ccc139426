use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

use glam_api::{db, routes};
use glam_common::AppConfig;
use glam_scraper::{InstagramScraper, ScraperConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("glam=info".parse()?))
        .init();

    let config = AppConfig::from_env()?;
    let scraper_config = ScraperConfig::from_env()?;
    info!(chrome_bin = %scraper_config.chrome_bin.display(), "resolved browser binary");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.db_url())
        .await?;
    db::run_migrations(&pool).await?;

    let scraper = InstagramScraper::new(scraper_config);
    let addr = format!("{}:{}", config.web_host, config.web_port);
    let app = routes::build_router(pool, config, scraper);

    info!("Glam API starting on {addr}");
    info!("GraphiQL IDE available at http://{addr}/graphql");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
