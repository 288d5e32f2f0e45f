use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};

use reelflix_common::{CatalogError, Movie, WatchEvent};

use crate::events;
use crate::store::CatalogStore;

/// The single composition point between storage and event generation.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Every movie currently in the catalog, in store-defined order.
    pub async fn all(&self) -> Result<Vec<Movie>, CatalogError> {
        self.store.find_all().await
    }

    /// One movie by id, or None when absent. Absence is not an error; only
    /// a store failure is.
    pub async fn by_id(&self, id: &str) -> Result<Option<Movie>, CatalogError> {
        self.store.find_by_id(id).await
    }

    /// Timer-paced watch events for a movie. Never terminates on its own.
    pub fn watch_events(&self, movie: Movie) -> BoxStream<'static, WatchEvent> {
        events::watch_events(movie).boxed()
    }

    /// Resolve an id, then stream watch events for the movie it names.
    ///
    /// An unknown id yields a stream that completes without emitting
    /// anything; only a store failure during resolution is an error.
    pub async fn watch_events_by_id(
        &self,
        id: &str,
    ) -> Result<BoxStream<'static, WatchEvent>, CatalogError> {
        match self.store.find_by_id(id).await? {
            Some(movie) => Ok(self.watch_events(movie)),
            None => Ok(stream::empty().boxed()),
        }
    }
}
