//! TMDB metadata provider.
//!
//! Resolves a movie id to poster and genre metadata via GET /movie/{id}.
//! A missing poster_path maps to the placeholder poster URL; a missing
//! genre list maps to an empty list.

use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{ApiMovieDetails, MovieId, MovieMetadata},
    services::providers::MetadataProvider,
};

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    fn details_url(&self, movie_id: MovieId) -> String {
        format!("{}/movie/{}", self.api_url, movie_id)
    }
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbProvider {
    async fn fetch_metadata(&self, movie_id: MovieId) -> AppResult<MovieMetadata> {
        let response = self
            .http_client
            .get(self.details_url(movie_id))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", "en-US"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let details: ApiMovieDetails = response.json().await.map_err(|e| {
            AppError::ExternalApi(format!("Failed to parse TMDB response: {}", e))
        })?;

        let metadata = MovieMetadata::from(details);

        tracing::debug!(
            movie_id,
            genres = metadata.genres.len(),
            provider = self.name(),
            "Metadata fetched"
        );

        Ok(metadata)
    }

    fn clone_for_task(&self) -> Box<dyn MetadataProvider> {
        Box::new(self.clone())
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
