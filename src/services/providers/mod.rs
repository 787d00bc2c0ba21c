//! Movie metadata provider abstraction.
//!
//! Pluggable architecture for remote movie-metadata sources (TMDB today).
//! A provider resolves an opaque movie id to poster and genre data.

use crate::{
    error::AppResult,
    models::{MovieId, MovieMetadata},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for remote metadata providers
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch poster URL and genre names for a single movie id
    async fn fetch_metadata(&self, movie_id: MovieId) -> AppResult<MovieMetadata>;

    /// Fetch metadata for multiple movie ids in parallel.
    ///
    /// Results come back in input order. Each fetch is independent: a
    /// failed or panicked fetch degrades only its own slot to the
    /// placeholder metadata and is never surfaced to the caller.
    ///
    /// Default implementation fans out one task per id. Providers can
    /// override when a bulk endpoint is available.
    async fn fetch_metadata_batch(&self, movie_ids: &[MovieId]) -> Vec<MovieMetadata> {
        let mut tasks = Vec::with_capacity(movie_ids.len());

        for &movie_id in movie_ids {
            let provider = self.clone_for_task();
            let task = tokio::spawn(async move { provider.fetch_metadata(movie_id).await });
            tasks.push(task);
        }

        let mut results = Vec::with_capacity(movie_ids.len());

        for (task, &movie_id) in tasks.into_iter().zip(movie_ids) {
            let metadata = match task.await {
                Ok(Ok(metadata)) => metadata,
                Ok(Err(e)) => {
                    tracing::warn!(
                        movie_id,
                        error = %e,
                        "Metadata fetch failed, substituting placeholder"
                    );
                    MovieMetadata::placeholder()
                }
                Err(e) => {
                    tracing::warn!(
                        movie_id,
                        error = %e,
                        "Metadata task join error, substituting placeholder"
                    );
                    MovieMetadata::placeholder()
                }
            };
            results.push(metadata);
        }

        results
    }

    /// Clone provider for parallel task execution
    ///
    /// Required because providers need to be moved into tokio tasks.
    fn clone_for_task(&self) -> Box<dyn MetadataProvider>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
