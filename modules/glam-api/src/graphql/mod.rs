pub mod context;
pub mod error;
pub mod mutations;
pub mod query;
pub mod types;

use async_graphql::{EmptySubscription, Schema};
use sqlx::PgPool;

use glam_scraper::InstagramScraper;

use crate::jwt::JwtService;
use mutations::MutationRoot;
use query::QueryRoot;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(pool: PgPool, jwt_service: JwtService, scraper: InstagramScraper) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(pool)
        .data(jwt_service)
        .data(scraper)
        .limit_depth(10)
        .limit_complexity(1000)
        .finish()
}
