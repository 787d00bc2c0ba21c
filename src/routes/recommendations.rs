use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::Recommendation;
use crate::services::recommender;
use crate::state::AppState;

/// Request payload for movie recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub title: String,
}

/// Response payload carrying the ranked recommendations
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Recommendation>,
}

/// Returns the top recommendations for a catalog title.
///
/// Lookup is exact, so the title must match the catalog spelling. Blank
/// titles are rejected before touching the catalog.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    if request.title.trim().is_empty() {
        return Err(AppError::InvalidInput("Title must not be empty".to_string()));
    }

    let recommendations = recommender::recommend(
        &state.catalog,
        &state.similarity,
        state.metadata_provider.clone(),
        &request.title,
    )
    .await?;

    Ok(Json(RecommendationResponse { recommendations }))
}
