use std::fs;
use std::path::Path;

use anyhow::Context;

/// Precomputed pairwise similarity scores between catalog items.
///
/// Consumed read-only: only whole rows are ever read, so symmetry is
/// neither assumed nor checked. Square shape and agreement with the
/// catalog length are validated at load; violations are fatal.
#[derive(Debug)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f32>>,
}

impl SimilarityMatrix {
    /// Load the similarity artifact (a JSON 2D array) from disk.
    ///
    /// `expected_len` is the catalog length; the matrix must be exactly
    /// `expected_len` x `expected_len`.
    pub fn load(path: impl AsRef<Path>, expected_len: usize) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read similarity artifact {}", path.display()))?;
        let rows: Vec<Vec<f32>> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse similarity artifact {}", path.display()))?;

        anyhow::ensure!(
            rows.len() == expected_len,
            "Similarity artifact {} has {} rows, catalog has {} items",
            path.display(),
            rows.len(),
            expected_len
        );

        let matrix = Self::from_rows(rows)
            .with_context(|| format!("Invalid similarity artifact {}", path.display()))?;

        tracing::info!(items = matrix.len(), path = %path.display(), "Loaded similarity matrix");

        Ok(matrix)
    }

    /// Build a matrix from already-deserialized rows, validating squareness
    pub fn from_rows(rows: Vec<Vec<f32>>) -> anyhow::Result<Self> {
        let n = rows.len();
        for (index, row) in rows.iter().enumerate() {
            anyhow::ensure!(
                row.len() == n,
                "Similarity row {} has length {}, expected {}",
                index,
                row.len(),
                n
            );
        }

        Ok(Self { rows })
    }

    /// Similarity of the item at `index` to every catalog item
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        self.rows.get(index).map(|row| row.as_slice())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
