use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use reelflix_common::{CatalogError, Movie};

/// Persistence boundary for the movie catalog. The service only ever talks
/// to this trait; a document-store driver would plug in here.
///
/// No transactions, no query filters beyond by-id.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Every movie in the store, in store-defined order.
    async fn find_all(&self) -> Result<Vec<Movie>, CatalogError>;

    /// A single movie by id, or None when absent. Absence is not an error.
    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>, CatalogError>;

    /// Remove every movie.
    async fn delete_all(&self) -> Result<(), CatalogError>;

    /// Insert or replace a movie. Echoes the stored value.
    async fn save(&self, movie: Movie) -> Result<Movie, CatalogError>;
}

/// In-process catalog store. Store-defined order is id order.
#[derive(Default)]
pub struct MemoryCatalog {
    movies: RwLock<BTreeMap<String, Movie>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn find_all(&self) -> Result<Vec<Movie>, CatalogError> {
        Ok(self.movies.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>, CatalogError> {
        Ok(self.movies.read().await.get(id).cloned())
    }

    async fn delete_all(&self) -> Result<(), CatalogError> {
        self.movies.write().await.clear();
        Ok(())
    }

    async fn save(&self, movie: Movie) -> Result<Movie, CatalogError> {
        if movie.id.is_empty() {
            return Err(CatalogError::Validation(
                "movie id must not be empty".to_string(),
            ));
        }

        self.movies
            .write()
            .await
            .insert(movie.id.clone(), movie.clone());
        Ok(movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn find_all_on_empty_store_is_empty() {
        let store = MemoryCatalog::new();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_echoes_and_find_by_id_returns_it() {
        let store = MemoryCatalog::new();
        let movie = Movie::new("1", "Aeon Flux", "drama");

        let echoed = store.save(movie.clone()).await.unwrap();
        assert_eq!(echoed, movie);

        let found = store.find_by_id("1").await.unwrap();
        assert_eq!(found, Some(movie));
    }

    #[tokio::test]
    async fn find_by_id_absent_is_none_not_error() {
        let store = MemoryCatalog::new();
        assert_eq!(store.find_by_id("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_rejects_empty_id() {
        let store = MemoryCatalog::new();
        let result = store.save(Movie::new("", "Untitled", "drama")).await;
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[tokio::test]
    async fn find_all_is_id_ordered() {
        let store = MemoryCatalog::new();
        store.save(Movie::new("b", "Second", "horror")).await.unwrap();
        store.save(Movie::new("a", "First", "comedy")).await.unwrap();

        let ids: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn delete_all_clears_the_store() {
        let store = MemoryCatalog::new();
        store.save(Movie::new("1", "Aeon Flux", "drama")).await.unwrap();

        store.delete_all().await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
