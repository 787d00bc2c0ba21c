use serde::{Deserialize, Serialize};

/// Opaque external reference for a movie (TMDB id), shared between the
/// catalog artifact and the metadata API.
pub type MovieId = u64;

/// Fallback poster returned when remote metadata is unavailable
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/500x750?text=No+Image";

/// Fallback genre caption when the remote catalog has no genre data
pub const NO_GENRE_INFO: &str = "No Genre Info";

/// Base URL for TMDB poster images (w500 rendition)
pub const TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Metadata resolved for a single movie from the remote catalog service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieMetadata {
    pub poster_url: String,
    pub genres: Vec<String>,
}

impl MovieMetadata {
    /// Placeholder metadata substituted when the remote lookup fails
    pub fn placeholder() -> Self {
        Self {
            poster_url: PLACEHOLDER_POSTER_URL.to_string(),
            genres: Vec::new(),
        }
    }

    /// Human-readable genre caption, falling back when no genres exist
    pub fn genre_label(&self) -> String {
        if self.genres.is_empty() {
            NO_GENRE_INFO.to_string()
        } else {
            self.genres.join(", ")
        }
    }
}

/// A single ranked recommendation returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub movie_id: MovieId,
    pub score: f32,
    pub poster_url: String,
    pub genre_label: String,
}

/// Three-way sentiment verdict
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

/// Result of scoring one piece of review text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SentimentResult {
    pub compound: f32,
    pub label: SentimentLabel,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Raw API response from GET /movie/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMovieDetails {
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<ApiGenre>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiGenre {
    pub name: String,
}

impl From<ApiMovieDetails> for MovieMetadata {
    fn from(details: ApiMovieDetails) -> Self {
        let poster_url = match details.poster_path {
            Some(path) => format!("{}{}", TMDB_IMAGE_BASE_URL, path),
            None => PLACEHOLDER_POSTER_URL.to_string(),
        };

        Self {
            poster_url,
            genres: details.genres.into_iter().map(|g| g.name).collect(),
        }
    }
}
