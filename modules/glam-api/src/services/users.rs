use async_graphql::Result;
use sqlx::PgPool;
use tracing::info;
use validator::ValidateEmail;

use glam_common::messages;

use crate::db::{self, users::UserRow};
use crate::graphql::error;
use crate::jwt::{AuthError, JwtService, TOKEN_TYPE_REFRESH};
use crate::password;

/// Authenticated user plus the freshly issued token pair.
pub struct Login {
    pub user: UserRow,
    pub access_token: String,
    pub refresh_token: String,
}

pub async fn register(
    pool: &PgPool,
    email: &str,
    first_name: &str,
    last_name: &str,
    plain_password: &str,
) -> Result<String> {
    validate_new_user(pool, email, plain_password).await?;

    let hashed = password::hash(plain_password).map_err(error::internal)?;
    db::users::insert(pool, email, Some(first_name), Some(last_name), &hashed, false)
        .await
        .map_err(|err| {
            // Lost the race against a concurrent registration.
            if db::is_unique_violation(&err) {
                error::bad_request_field("email", messages::USER_EXISTS_EMAIL)
            } else {
                error::internal(err)
            }
        })?;

    info!(email, "user registered");
    Ok(messages::USER_CREATED.to_string())
}

pub async fn login(
    pool: &PgPool,
    jwt: &JwtService,
    email: &str,
    plain_password: &str,
) -> Result<Login> {
    let user = db::users::find_by_email(pool, &email.to_lowercase())
        .await
        .map_err(error::internal)?
        .ok_or_else(|| error::bad_request(messages::USER_NOT_EXISTS))?;

    if !password::verify(
        plain_password,
        user.hashed_password.as_deref().unwrap_or_default(),
    ) {
        return Err(error::bad_request_field(
            "password",
            messages::INCORRECT_PASSWORD,
        ));
    }

    issue_tokens(jwt, user)
}

/// Exchange a refresh token for a fresh access/refresh pair.
pub async fn refresh(pool: &PgPool, jwt: &JwtService, refresh_token: &str) -> Result<Login> {
    let claims = match jwt.verify(refresh_token, TOKEN_TYPE_REFRESH) {
        Ok(claims) => claims,
        Err(AuthError::WrongTokenType) => {
            return Err(error::unauthorized(messages::WRONG_TOKEN));
        }
        Err(_) => return Err(error::unauthorized(messages::INVALID_TOKEN)),
    };

    let user = db::users::find_by_id(pool, claims.user_id)
        .await
        .map_err(error::internal)?
        .ok_or_else(|| error::not_found(messages::USER_NOT_EXISTS))?;

    issue_tokens(jwt, user)
}

/// Update the profile fields that were provided, leaving the rest as-is.
pub async fn update_profile(
    pool: &PgPool,
    user: &UserRow,
    email: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<UserRow> {
    db::users::update(pool, user.id, email, first_name, last_name)
        .await
        .map_err(|err| {
            if db::is_unique_violation(&err) {
                error::bad_request_field("email", messages::EMAIL_TAKEN)
            } else {
                error::internal(err)
            }
        })
}

pub async fn delete_user(pool: &PgPool, user: &UserRow) -> Result<String> {
    db::users::delete(pool, user.id)
        .await
        .map_err(error::internal)?;
    info!(email = %user.email, "user deleted");
    Ok(messages::user_deleted(&user.email))
}

pub async fn change_password(
    pool: &PgPool,
    user: &UserRow,
    current_password: &str,
    new_password: &str,
) -> Result<String> {
    if !password::verify(
        current_password,
        user.hashed_password.as_deref().unwrap_or_default(),
    ) {
        return Err(error::bad_request_field(
            "current_password",
            messages::INCORRECT_PASSWORD,
        ));
    }
    if current_password == new_password {
        return Err(error::bad_request_field(
            "password",
            messages::PASSWORD_REUSED,
        ));
    }
    password::validate(new_password).map_err(|msg| error::bad_request_field("password", msg))?;

    let hashed = password::hash(new_password).map_err(error::internal)?;
    db::users::set_password(pool, user.id, &hashed)
        .await
        .map_err(error::internal)?;

    info!(email = %user.email, "password changed");
    Ok(messages::PASSWORD_CHANGED.to_string())
}

fn issue_tokens(jwt: &JwtService, user: UserRow) -> Result<Login> {
    let tokens = jwt.create_token_pair(user.id).map_err(error::internal)?;
    Ok(Login {
        user,
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
    })
}

/// Registration checks, in order: email not taken, email well-formed,
/// password strong enough.
async fn validate_new_user(pool: &PgPool, email: &str, plain_password: &str) -> Result<()> {
    if db::users::find_by_email(pool, email)
        .await
        .map_err(error::internal)?
        .is_some()
    {
        return Err(error::bad_request_field(
            "email",
            messages::USER_EXISTS_EMAIL,
        ));
    }
    if !email.validate_email() {
        return Err(error::bad_request_field("email", messages::INVALID_EMAIL));
    }
    password::validate(plain_password).map_err(|msg| error::bad_request_field("password", msg))?;
    Ok(())
}
