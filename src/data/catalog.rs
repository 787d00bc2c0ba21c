use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::models::MovieId;

/// One entry of the movie catalog artifact.
///
/// The position in the artifact array is the item's row index into the
/// similarity matrix; it is assigned at load time and stable for the
/// process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub movie_id: MovieId,
    pub title: String,
}

/// Immutable, in-memory catalog of recommendable movies.
///
/// Built once at startup from the serialized artifact. Alongside the
/// ordered item list it carries a title index for O(1) resolution; on
/// duplicate titles the first occurrence wins.
#[derive(Debug)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    title_index: HashMap<String, usize>,
}

impl Catalog {
    /// Load the catalog artifact (a JSON array of records) from disk.
    ///
    /// A missing, malformed, or empty artifact is fatal: the service
    /// cannot answer any request without a catalog.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog artifact {}", path.display()))?;
        let items: Vec<CatalogItem> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog artifact {}", path.display()))?;

        anyhow::ensure!(
            !items.is_empty(),
            "Catalog artifact {} contains no items",
            path.display()
        );

        tracing::info!(items = items.len(), path = %path.display(), "Loaded movie catalog");

        Ok(Self::from_items(items))
    }

    /// Build a catalog from already-deserialized items
    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        let mut title_index = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            // first occurrence wins on duplicate titles
            title_index.entry(item.title.clone()).or_insert(index);
        }

        Self { items, title_index }
    }

    /// Resolve a title to its row index
    pub fn resolve(&self, title: &str) -> Option<usize> {
        self.title_index.get(title).copied()
    }

    /// Get the item at a row index
    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    /// All titles in catalog order
    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.title.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<CatalogItem> {
        vec![
            CatalogItem {
                movie_id: 19995,
                title: "Avatar".to_string(),
            },
            CatalogItem {
                movie_id: 285,
                title: "Pirates of the Caribbean: At World's End".to_string(),
            },
            CatalogItem {
                movie_id: 206647,
                title: "Spectre".to_string(),
            },
        ]
    }

    fn temp_artifact(contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("catalog-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_resolve_known_title() {
        let catalog = Catalog::from_items(sample_items());
        assert_eq!(catalog.resolve("Spectre"), Some(2));
        assert_eq!(catalog.get(2).unwrap().movie_id, 206647);
    }

    #[test]
    fn test_resolve_unknown_title() {
        let catalog = Catalog::from_items(sample_items());
        assert_eq!(catalog.resolve("Not A Movie"), None);
    }

    #[test]
    fn test_duplicate_titles_first_match_wins() {
        let mut items = sample_items();
        items.push(CatalogItem {
            movie_id: 999,
            title: "Avatar".to_string(),
        });

        let catalog = Catalog::from_items(items);
        assert_eq!(catalog.resolve("Avatar"), Some(0));
        assert_eq!(catalog.get(0).unwrap().movie_id, 19995);
    }

    #[test]
    fn test_titles_preserve_catalog_order() {
        let catalog = Catalog::from_items(sample_items());
        assert_eq!(
            catalog.titles(),
            vec![
                "Avatar",
                "Pirates of the Caribbean: At World's End",
                "Spectre"
            ]
        );
    }

    #[test]
    fn test_load_from_artifact() {
        let path = temp_artifact(
            r#"[
                {"movie_id": 19995, "title": "Avatar"},
                {"movie_id": 206647, "title": "Spectre"}
            ]"#,
        );

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resolve("Spectre"), Some(1));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_missing_artifact_fails() {
        let result = Catalog::load("/nonexistent/catalog.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_malformed_artifact_fails() {
        let path = temp_artifact("{ not json ]");
        assert!(Catalog::load(&path).is_err());
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_empty_artifact_fails() {
        let path = temp_artifact("[]");
        assert!(Catalog::load(&path).is_err());
        fs::remove_file(path).ok();
    }
}
