use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

/// Response payload for the title listing endpoint
#[derive(Debug, Serialize)]
pub struct TitlesResponse {
    pub titles: Vec<String>,
}

/// Lists every catalog title in catalog order.
///
/// The UI uses this to populate its movie picker, so the order here
/// must match the catalog file.
pub async fn list_titles(State(state): State<AppState>) -> Json<TitlesResponse> {
    let titles = state
        .catalog
        .titles()
        .into_iter()
        .map(str::to_owned)
        .collect();

    Json(TitlesResponse { titles })
}
