use crate::handlers::{ingest, meta};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState, enable_cors: bool) -> Router {
    let router = Router::new()
        .route("/", get(meta::describe))
        .route("/api/data", post(ingest::submit))
        .route("/api/latest", get(ingest::latest))
        .route("/health", get(meta::health));

    let router = if enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
