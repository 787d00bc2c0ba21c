use std::cmp::Ordering;
use std::sync::Arc;

use crate::{
    data::{Catalog, SimilarityMatrix},
    error::{AppError, AppResult},
    models::{MovieId, Recommendation},
    services::providers::MetadataProvider,
};

/// Maximum number of recommendations returned per query
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Rank every other catalog item by similarity to the item at `self_index`.
///
/// Pairs each index with its score from the row and sorts descending by
/// score. The sort is stable, so ties keep ascending index order and the
/// ranking is deterministic for a fixed row. The query item is excluded
/// by matching index rather than by dropping the first-ranked entry, so
/// a row whose self-similarity is not maximal still never loses a
/// genuinely top-ranked neighbor.
pub fn rank_neighbors(row: &[f32], self_index: usize) -> Vec<(usize, f32)> {
    let mut ranked: Vec<(usize, f32)> = row.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.retain(|&(index, _)| index != self_index);
    ranked
}

/// Recommend up to [`MAX_RECOMMENDATIONS`] movies similar to `title`.
///
/// Resolves the title through the catalog's O(1) index, ranks the
/// matching similarity row, and enriches the selected neighbors with
/// remote metadata. Metadata failures degrade per-entry to placeholders
/// and never abort the batch; an unknown title yields `NotFound`.
pub async fn recommend(
    catalog: &Catalog,
    matrix: &SimilarityMatrix,
    provider: Arc<dyn MetadataProvider>,
    title: &str,
) -> AppResult<Vec<Recommendation>> {
    let index = catalog
        .resolve(title)
        .ok_or_else(|| AppError::NotFound(format!("Movie not found: {}", title)))?;

    let row = matrix
        .row(index)
        .ok_or_else(|| AppError::Internal(format!("No similarity row for index {}", index)))?;

    let mut selected = Vec::with_capacity(MAX_RECOMMENDATIONS);
    for (neighbor, score) in rank_neighbors(row, index)
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
    {
        let item = catalog.get(neighbor).ok_or_else(|| {
            AppError::Internal(format!("Catalog index {} out of range", neighbor))
        })?;
        selected.push((item, score));
    }

    let movie_ids: Vec<MovieId> = selected.iter().map(|(item, _)| item.movie_id).collect();
    let metadata = provider.fetch_metadata_batch(&movie_ids).await;

    let recommendations: Vec<Recommendation> = selected
        .into_iter()
        .zip(metadata)
        .map(|((item, score), meta)| Recommendation {
            title: item.title.clone(),
            movie_id: item.movie_id,
            score,
            genre_label: meta.genre_label(),
            poster_url: meta.poster_url,
        })
        .collect();

    tracing::info!(
        title = %title,
        results = recommendations.len(),
        provider = provider.name(),
        "Recommendation lookup completed"
    );

    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CatalogItem;
    use crate::models::{MovieMetadata, NO_GENRE_INFO, PLACEHOLDER_POSTER_URL};

    #[derive(Clone)]
    struct StubProvider {
        fail_ids: Vec<MovieId>,
    }

    #[async_trait::async_trait]
    impl MetadataProvider for StubProvider {
        async fn fetch_metadata(&self, movie_id: MovieId) -> AppResult<MovieMetadata> {
            if self.fail_ids.contains(&movie_id) {
                return Err(AppError::ExternalApi(format!(
                    "stub failure for {}",
                    movie_id
                )));
            }

            Ok(MovieMetadata {
                poster_url: format!("https://posters.test/{}.jpg", movie_id),
                genres: vec!["Action".to_string(), "Adventure".to_string()],
            })
        }

        fn clone_for_task(&self) -> Box<dyn MetadataProvider> {
            Box::new(self.clone())
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    fn test_catalog() -> Catalog {
        Catalog::from_items(
            (0..8)
                .map(|i| CatalogItem {
                    movie_id: 100 + i as MovieId,
                    title: format!("Movie {}", i),
                })
                .collect(),
        )
    }

    fn test_matrix() -> SimilarityMatrix {
        // row 0: neighbors ranked 3 > 1 > 5 > 2 > 7 > 4 > 6
        SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.8, 0.5, 0.9, 0.1, 0.7, 0.05, 0.3],
            vec![0.8, 1.0, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7],
            vec![0.5, 0.2, 1.0, 0.1, 0.2, 0.3, 0.4, 0.5],
            vec![0.9, 0.3, 0.1, 1.0, 0.5, 0.6, 0.7, 0.8],
            vec![0.1, 0.4, 0.2, 0.5, 1.0, 0.1, 0.2, 0.3],
            vec![0.7, 0.5, 0.3, 0.6, 0.1, 1.0, 0.4, 0.5],
            vec![0.05, 0.6, 0.4, 0.7, 0.2, 0.4, 1.0, 0.6],
            vec![0.3, 0.7, 0.5, 0.8, 0.3, 0.5, 0.6, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_rank_neighbors_descending() {
        let ranked = rank_neighbors(&[1.0, 0.8, 0.5, 0.9], 0);
        assert_eq!(ranked, vec![(3, 0.9), (1, 0.8), (2, 0.5)]);
    }

    #[test]
    fn test_rank_neighbors_ties_keep_index_order() {
        let ranked = rank_neighbors(&[1.0, 0.5, 0.5, 0.5], 0);
        assert_eq!(ranked, vec![(1, 0.5), (2, 0.5), (3, 0.5)]);
    }

    #[test]
    fn test_rank_neighbors_excludes_self_by_index() {
        // self-similarity is not maximal; the genuinely top-ranked
        // neighbor must survive and the query item must not
        let ranked = rank_neighbors(&[0.4, 0.9, 0.2], 0);
        assert_eq!(ranked, vec![(1, 0.9), (2, 0.2)]);
    }

    #[tokio::test]
    async fn test_recommend_returns_top_five_in_order() {
        let catalog = test_catalog();
        let matrix = test_matrix();
        let provider = Arc::new(StubProvider { fail_ids: vec![] });

        let results = recommend(&catalog, &matrix, provider, "Movie 0")
            .await
            .unwrap();

        let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Movie 3", "Movie 1", "Movie 5", "Movie 2", "Movie 7"]
        );
        assert!(results.iter().all(|r| r.title != "Movie 0"));
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(results[0].poster_url, "https://posters.test/103.jpg");
        assert_eq!(results[0].genre_label, "Action, Adventure");
    }

    #[tokio::test]
    async fn test_recommend_is_deterministic() {
        let catalog = test_catalog();
        let matrix = test_matrix();
        let provider = Arc::new(StubProvider { fail_ids: vec![] });

        let first = recommend(&catalog, &matrix, provider.clone(), "Movie 0")
            .await
            .unwrap();
        let second = recommend(&catalog, &matrix, provider, "Movie 0")
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_recommend_unknown_title_is_not_found() {
        let catalog = test_catalog();
        let matrix = test_matrix();
        let provider = Arc::new(StubProvider { fail_ids: vec![] });

        let result = recommend(&catalog, &matrix, provider, "nonexistent title").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_recommend_small_catalog_returns_fewer() {
        let catalog = Catalog::from_items(vec![
            CatalogItem {
                movie_id: 1,
                title: "A".to_string(),
            },
            CatalogItem {
                movie_id: 2,
                title: "B".to_string(),
            },
            CatalogItem {
                movie_id: 3,
                title: "C".to_string(),
            },
        ]);
        let matrix = SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.3, 0.6],
            vec![0.3, 1.0, 0.2],
            vec![0.6, 0.2, 1.0],
        ])
        .unwrap();
        let provider = Arc::new(StubProvider { fail_ids: vec![] });

        let results = recommend(&catalog, &matrix, provider, "A").await.unwrap();
        let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "B"]);
    }

    #[tokio::test]
    async fn test_recommend_metadata_failure_degrades_to_placeholder() {
        let catalog = test_catalog();
        let matrix = test_matrix();
        // movie_id 103 backs the top-ranked neighbor "Movie 3"
        let provider = Arc::new(StubProvider {
            fail_ids: vec![103],
        });

        let results = recommend(&catalog, &matrix, provider, "Movie 0")
            .await
            .unwrap();

        assert_eq!(results.len(), 5);
        assert_eq!(results[0].title, "Movie 3");
        assert_eq!(results[0].poster_url, PLACEHOLDER_POSTER_URL);
        assert_eq!(results[0].genre_label, NO_GENRE_INFO);
        // remaining entries are unaffected
        assert_eq!(results[1].poster_url, "https://posters.test/101.jpg");
        assert_eq!(results[1].genre_label, "Action, Adventure");
    }
}
