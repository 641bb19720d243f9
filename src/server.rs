use axum::{
    extract::Request,
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::api;
use crate::config::Config;
use crate::db::SqliteRepository;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<SqliteRepository>,
}

impl AppState {
    pub fn new(config: Config, db: Arc<SqliteRepository>) -> Self {
        Self {
            config: Arc::new(config),
            db,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.listen.request_timeout);

    Router::new()
        .route("/", get(api::health))
        .route("/movies", get(api::list_movies))
        .route("/movies/:movie_id", get(api::get_movie))
        .route("/rating/:user_id/:movie_id", get(api::get_rating))
        .route("/ratings", get(api::list_ratings))
        .route("/tag/:user_id/:movie_id/:tag_text", get(api::get_tag))
        .route("/tags", get(api::list_tags))
        .route("/link/:movie_id", get(api::get_link))
        .route("/links", get(api::list_links))
        .route("/analystics", get(api::get_analytics))
        .route("/analytics", get(api::get_analytics))
        .fallback(fallback_handler)
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn fallback_handler(req: Request) -> impl IntoResponse {
    // CORS preflight for paths without a route.
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    (
        StatusCode::NOT_FOUND,
        Json(api::ErrorBody {
            detail: "Not Found".to_string(),
        }),
    )
        .into_response()
}
