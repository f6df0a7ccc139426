use async_graphql::{Context, Object, Result};
use sqlx::PgPool;

use crate::graphql::context::{self, AuthGuard};
use crate::graphql::types::{
    ChangePasswordInput, LoginSuccessType, MessageType, RefreshTokenInput, UserInput,
    UserRegisterInput, UserType,
};
use crate::jwt::JwtService;
use crate::services::{self, users::Login};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    // ========== Open mutations ==========

    /// Create an account. Answers with a confirmation message.
    async fn user_register(
        &self,
        ctx: &Context<'_>,
        input: UserRegisterInput,
    ) -> Result<MessageType> {
        let pool = ctx.data_unchecked::<PgPool>();
        let message = services::users::register(
            pool,
            &input.email,
            &input.first_name,
            &input.last_name,
            &input.password,
        )
        .await?;
        Ok(MessageType::new(message))
    }

    async fn login(
        &self,
        ctx: &Context<'_>,
        email: String,
        password: String,
    ) -> Result<LoginSuccessType> {
        let pool = ctx.data_unchecked::<PgPool>();
        let jwt = ctx.data_unchecked::<JwtService>();
        let login = services::users::login(pool, jwt, &email, &password).await?;
        Ok(login_success(login))
    }

    /// Trade a valid refresh token for a new token pair.
    async fn token_refresh(
        &self,
        ctx: &Context<'_>,
        input: RefreshTokenInput,
    ) -> Result<LoginSuccessType> {
        let pool = ctx.data_unchecked::<PgPool>();
        let jwt = ctx.data_unchecked::<JwtService>();
        let login = services::users::refresh(pool, jwt, &input.refresh_token).await?;
        Ok(login_success(login))
    }

    // ========== Mutations on the authenticated user ==========

    #[graphql(guard = "AuthGuard")]
    async fn user_update(&self, ctx: &Context<'_>, input: UserInput) -> Result<UserType> {
        let user = context::current_user(ctx).await?;
        let pool = ctx.data_unchecked::<PgPool>();
        let updated = services::users::update_profile(
            pool,
            &user,
            input.email.as_deref(),
            input.first_name.as_deref(),
            input.last_name.as_deref(),
        )
        .await?;
        Ok(UserType::from(updated))
    }

    #[graphql(guard = "AuthGuard")]
    async fn user_delete(&self, ctx: &Context<'_>) -> Result<MessageType> {
        let user = context::current_user(ctx).await?;
        let pool = ctx.data_unchecked::<PgPool>();
        let message = services::users::delete_user(pool, &user).await?;
        Ok(MessageType::new(message))
    }

    #[graphql(guard = "AuthGuard")]
    async fn change_password(
        &self,
        ctx: &Context<'_>,
        input: ChangePasswordInput,
    ) -> Result<MessageType> {
        let user = context::current_user(ctx).await?;
        let pool = ctx.data_unchecked::<PgPool>();
        let message =
            services::users::change_password(pool, &user, &input.current_password, &input.password)
                .await?;
        Ok(MessageType::new(message))
    }
}

fn login_success(login: Login) -> LoginSuccessType {
    LoginSuccessType {
        user: UserType::from(login.user),
        access_token: login.access_token,
        refresh_token: login.refresh_token,
    }
}
