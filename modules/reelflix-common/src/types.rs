use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Catalog Types ---

/// A catalog entry. Immutable after creation; there is no update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub genre: String,
}

impl Movie {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            genre: genre.into(),
        }
    }
}

/// One synthetic "someone watched this movie" occurrence. Carries the movie
/// by value. Never persisted; exists only inside a watch stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchEvent {
    pub movie: Movie,
    pub at: DateTime<Utc>,
    pub viewer: String,
}
