use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};
use crate::state::AppState;

pub mod recommendations;
pub mod sentiment;
pub mod titles;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    let ui = ServeDir::new("static").fallback(ServeFile::new("static/index.html"));

    Router::new()
        .route("/health", get(health_check))
        // Catalog titles for the UI dropdown
        .route("/api/titles", get(titles::list_titles))
        // Recommendations
        .route("/api/recommend", post(recommendations::recommend))
        // Review sentiment
        .route("/api/analyze", post(sentiment::analyze))
        // Single-page UI
        .fallback_service(ui)
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> StatusCode {
    StatusCode::OK
}
