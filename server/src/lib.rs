use axum::{extract::{Path, Query, State}, http::StatusCode, routing::get, Json, Router};
use moviematch_core::tokenizer::tokenize;
use moviematch_core::{IndexSnapshot, Recommendation, RecommendError, DEFAULT_TOP_N};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

const MAX_K: usize = 100;

#[derive(Deserialize)]
pub struct RecommendParams {
    pub title: String,
    #[serde(default = "default_k")]
    pub k: usize,
}
fn default_k() -> usize { DEFAULT_TOP_N }

#[derive(Serialize)]
pub struct RecommendResponse {
    pub title: String,
    pub took_s: f64,
    pub results: Vec<Recommendation>,
}

#[derive(Serialize)]
pub struct MoviesResponse {
    pub total: usize,
    pub titles: Vec<String>,
}

#[derive(Serialize)]
pub struct MovieResponse {
    pub title: String,
    pub text: String,
    pub tokens: usize,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn not_found(err: RecommendError) -> ApiError {
    (StatusCode::NOT_FOUND, Json(ErrorResponse { error: err.to_string() }))
}

/// Shared, read-only state. The snapshot is never mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub snapshot: Arc<IndexSnapshot>,
}

pub fn build_app(snapshot: IndexSnapshot) -> Router {
    let app_state = AppState { snapshot: Arc::new(snapshot) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/recommend", get(recommend_handler))
        .route("/movies", get(movies_handler))
        .route("/movies/:title", get(movie_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn recommend_handler(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let start = std::time::Instant::now();
    let k = params.k.clamp(1, MAX_K);
    let results = state.snapshot.recommend(&params.title, k).map_err(not_found)?;
    let took_s = start.elapsed().as_secs_f64();
    tracing::debug!(title = %params.title, k, hits = results.len(), took_s, "recommend");
    Ok(Json(RecommendResponse { title: params.title, took_s, results }))
}

pub async fn movies_handler(State(state): State<AppState>) -> Json<MoviesResponse> {
    let titles: Vec<String> = state.snapshot.corpus().titles().map(str::to_string).collect();
    Json(MoviesResponse { total: titles.len(), titles })
}

pub async fn movie_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<MovieResponse>, ApiError> {
    match state.snapshot.corpus().text(&title) {
        Some(text) => Ok(Json(MovieResponse {
            tokens: tokenize(text).len(),
            text: text.to_string(),
            title,
        })),
        None => Err(not_found(RecommendError::NotFound { title })),
    }
}
