use async_graphql::{Context, Object, Result};
use sqlx::PgPool;

use glam_scraper::InstagramScraper;

use crate::db;
use crate::graphql::context::{self, AuthGuard};
use crate::graphql::error;
use crate::graphql::types::{GetPhotosResult, InstagramInput, UserType};
use crate::services;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The authenticated user's own profile.
    #[graphql(guard = "AuthGuard")]
    async fn me(&self, ctx: &Context<'_>) -> Result<UserType> {
        let user = context::current_user(ctx).await?;
        Ok(UserType::from(user))
    }

    /// All registered users.
    #[graphql(guard = "AuthGuard")]
    async fn users_list(&self, ctx: &Context<'_>) -> Result<Vec<UserType>> {
        let pool = ctx.data_unchecked::<PgPool>();
        let users = db::users::list(pool).await.map_err(error::internal)?;
        Ok(users.into_iter().map(UserType::from).collect())
    }

    /// Scrape photo links from an Instagram profile and store the result.
    #[graphql(guard = "AuthGuard")]
    async fn get_photos(
        &self,
        ctx: &Context<'_>,
        input: InstagramInput,
    ) -> Result<GetPhotosResult> {
        let username = input.username.trim();
        if username.is_empty() {
            return Err(error::bad_request_field(
                "username",
                "username must not be empty",
            ));
        }
        if input.max_count < 1 {
            return Err(error::bad_request_field(
                "max_count",
                "max_count must be at least 1",
            ));
        }

        let user = context::current_user(ctx).await?;
        let pool = ctx.data_unchecked::<PgPool>();
        let scraper = ctx.data_unchecked::<InstagramScraper>();
        services::instagram::get_photos(pool, scraper, user.id, username, input.max_count as usize)
            .await
    }
}
