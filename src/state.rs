use std::sync::Arc;

use crate::data::{Catalog, SimilarityMatrix};
use crate::services::{providers::MetadataProvider, sentiment::SentimentAnalyzer};

/// Shared application state
///
/// Everything here is built once at startup and read-only afterwards,
/// so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub similarity: Arc<SimilarityMatrix>,
    pub metadata_provider: Arc<dyn MetadataProvider>,
    pub sentiment: Arc<SentimentAnalyzer>,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        similarity: SimilarityMatrix,
        metadata_provider: Arc<dyn MetadataProvider>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            similarity: Arc::new(similarity),
            metadata_provider,
            sentiment: Arc::new(SentimentAnalyzer::new()),
        }
    }
}
