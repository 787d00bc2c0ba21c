use axum::{extract::State, Json};
use serde::Deserialize;

use crate::models::SentimentResult;
use crate::state::AppState;

/// Request payload for review sentiment analysis
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Scores a free-text review and returns its compound score and label.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<SentimentResult> {
    let result = state.sentiment.analyze(&request.text);

    tracing::debug!(
        compound = result.compound,
        label = ?result.label,
        "Analyzed review sentiment"
    );

    Json(result)
}
