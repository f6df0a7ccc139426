use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use glam_common::{messages, AppConfig};
use glam_scraper::InstagramScraper;

use crate::graphql::{self, context, AppSchema};
use crate::jwt::JwtService;
use crate::services;

#[derive(Clone)]
pub struct AppState {
    pool: PgPool,
    schema: AppSchema,
    jwt_service: JwtService,
    config: AppConfig,
}

pub fn build_router(pool: PgPool, config: AppConfig, scraper: InstagramScraper) -> Router {
    let jwt_service = JwtService::new(
        &config.secret_key,
        config.access_token_expire_minutes,
        config.refresh_token_expire_days,
    );
    let schema = graphql::build_schema(pool.clone(), jwt_service.clone(), scraper);

    Router::new()
        .route("/", get(health))
        .route("/info", get(info))
        .route("/token", post(token))
        .route("/graphql", get(graphiql_handler).post(graphql_handler))
        .with_state(AppState {
            pool,
            schema,
            jwt_service,
            config,
        })
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path + status + latency only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

async fn graphql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let auth = context::auth_state_from_headers(&headers, &state.jwt_service);
    let request = req.into_inner().data(auth);
    let response = state.schema.execute(request).await;
    if !response.errors.is_empty() {
        tracing::warn!(errors = ?response.errors, "GraphQL errors");
    }
    response.into()
}

async fn graphiql_handler() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Serialize)]
struct InfoResponse {
    app_name: String,
    admin_email: String,
}

async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        app_name: state.config.app_name.clone(),
        admin_email: state.config.admin_email.clone(),
    })
}

#[derive(Deserialize)]
struct TokenForm {
    username: String,
    password: String,
}

#[derive(Serialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    token_type: &'static str,
}

/// OAuth2-style password login. The form's `username` field carries the
/// email. Any failure answers a bare 401.
async fn token(State(state): State<AppState>, Form(form): Form<TokenForm>) -> Response {
    match services::users::login(&state.pool, &state.jwt_service, &form.username, &form.password)
        .await
    {
        Ok(login) => Json(TokenResponse {
            access_token: login.access_token,
            refresh_token: login.refresh_token,
            token_type: "Bearer",
        })
        .into_response(),
        Err(_) => (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Bearer")],
            Json(serde_json::json!({ "detail": messages::LOGIN_FAILED })),
        )
            .into_response(),
    }
}
