use async_graphql::{Context, Guard, Result};
use axum::http::{header::AUTHORIZATION, HeaderMap};
use sqlx::PgPool;

use glam_common::messages;

use crate::db::{self, users::UserRow};
use crate::graphql::error;
use crate::jwt::{AuthError, Claims, JwtService, TOKEN_TYPE_ACCESS};

/// Outcome of inspecting the Authorization header, computed once per HTTP
/// request and stashed in the GraphQL context.
#[derive(Debug, Clone)]
pub enum AuthState {
    /// No Authorization header at all.
    Missing,
    /// Header present but not `Bearer <token>`.
    WrongScheme,
    /// Bearer token that failed decoding or expired.
    Invalid,
    /// Valid JWT carrying the wrong type claim (e.g. a refresh token).
    WrongType,
    Authenticated(Claims),
}

impl AuthState {
    /// Claims if authenticated, otherwise the matching GraphQL error.
    pub fn claims(&self) -> Result<&Claims> {
        match self {
            AuthState::Authenticated(claims) => Ok(claims),
            AuthState::Missing => Err(error::unauthorized(messages::AUTH_NEEDED)),
            AuthState::WrongScheme => Err(error::unauthorized(messages::WRONG_TOKEN_HEADER)),
            AuthState::Invalid => Err(error::unauthorized(messages::INVALID_TOKEN)),
            AuthState::WrongType => Err(error::unauthorized(messages::WRONG_TOKEN)),
        }
    }
}

/// Classify the request's Authorization header. Only a `Bearer` access
/// token authenticates a request.
pub fn auth_state_from_headers(headers: &HeaderMap, jwt: &JwtService) -> AuthState {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return AuthState::Missing;
    };
    let Ok(value) = value.to_str() else {
        return AuthState::WrongScheme;
    };
    let mut parts = value.split_whitespace();
    let (Some(scheme), Some(token), None) = (parts.next(), parts.next(), parts.next()) else {
        return AuthState::WrongScheme;
    };
    if scheme != "Bearer" {
        return AuthState::WrongScheme;
    }

    match jwt.verify(token, TOKEN_TYPE_ACCESS) {
        Ok(claims) => AuthState::Authenticated(claims),
        Err(AuthError::WrongTokenType) => AuthState::WrongType,
        Err(_) => AuthState::Invalid,
    }
}

/// Rejects requests that do not carry a valid Bearer access token.
pub struct AuthGuard;

impl Guard for AuthGuard {
    async fn check(&self, ctx: &Context<'_>) -> Result<()> {
        ctx.data_unchecked::<AuthState>().claims().map(|_| ())
    }
}

/// Load the authenticated user's row, or fail with the matching auth error.
pub async fn current_user(ctx: &Context<'_>) -> Result<UserRow> {
    let claims = ctx.data_unchecked::<AuthState>().claims()?;
    let pool = ctx.data_unchecked::<PgPool>();
    db::users::find_by_id(pool, claims.user_id)
        .await
        .map_err(error::internal)?
        .ok_or_else(|| error::not_found(messages::USER_NOT_EXISTS))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("context-test-secret", 60, 30)
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn missing_header() {
        let state = auth_state_from_headers(&HeaderMap::new(), &service());
        assert!(matches!(state, AuthState::Missing));
    }

    #[test]
    fn non_bearer_scheme() {
        let svc = service();
        let token = svc.create_token_pair(1).unwrap().access_token;
        let state = auth_state_from_headers(&headers_with(&format!("Basic {token}")), &svc);
        assert!(matches!(state, AuthState::WrongScheme));
    }

    #[test]
    fn bare_token_without_scheme() {
        let state = auth_state_from_headers(&headers_with("sometoken"), &service());
        assert!(matches!(state, AuthState::WrongScheme));
    }

    #[test]
    fn garbage_bearer_token() {
        let state = auth_state_from_headers(&headers_with("Bearer garbage"), &service());
        assert!(matches!(state, AuthState::Invalid));
    }

    #[test]
    fn refresh_token_in_authorization_header() {
        let svc = service();
        let token = svc.create_token_pair(1).unwrap().refresh_token;
        let state = auth_state_from_headers(&headers_with(&format!("Bearer {token}")), &svc);
        assert!(matches!(state, AuthState::WrongType));
    }

    #[test]
    fn valid_access_token() {
        let svc = service();
        let token = svc.create_token_pair(7).unwrap().access_token;
        let state = auth_state_from_headers(&headers_with(&format!("Bearer {token}")), &svc);
        match state {
            AuthState::Authenticated(claims) => assert_eq!(claims.user_id, 7),
            other => panic!("expected Authenticated, got {other:?}"),
        }
    }
}
