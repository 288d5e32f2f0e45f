use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use uuid::Uuid;

use reelflix_common::{CatalogError, Movie};

use crate::store::CatalogStore;

const SEED_TITLES: [&str; 7] = [
    "Aeon Flux",
    "Enter the Mono<Void>",
    "The Fluxinator",
    "Silence of the Lambdas",
    "Reactive Mongos on a Plane",
    "Y tu mono Tambien",
    "Attack of the Fluxes",
];

const GENRES: [&str; 6] = [
    "comedy",
    "horror",
    "romcom",
    "documentary",
    "action",
    "drama",
];

/// Reset the store and load the demo catalog: wipe everything, then insert
/// one movie per title with a fresh id and a randomly drawn genre.
pub async fn seed_catalog(store: &dyn CatalogStore) -> Result<(), CatalogError> {
    store.delete_all().await?;

    let mut rng = SmallRng::from_os_rng();
    for title in SEED_TITLES {
        let genre = GENRES[rng.random_range(0..GENRES.len())];
        let movie = store
            .save(Movie::new(Uuid::new_v4().to_string(), title, genre))
            .await?;
        info!(id = %movie.id, title = %movie.title, genre = %movie.genre, "Seeded movie");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::store::MemoryCatalog;

    use super::*;

    #[tokio::test]
    async fn seeds_all_titles_with_known_genres() {
        let store = MemoryCatalog::new();
        seed_catalog(&store).await.unwrap();

        let movies = store.find_all().await.unwrap();
        assert_eq!(movies.len(), SEED_TITLES.len());

        let titles: HashSet<&str> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, SEED_TITLES.iter().copied().collect());

        for movie in &movies {
            assert!(!movie.id.is_empty());
            assert!(GENRES.contains(&movie.genre.as_str()));
        }
    }

    #[tokio::test]
    async fn reseeding_replaces_rather_than_accumulates() {
        let store = MemoryCatalog::new();
        seed_catalog(&store).await.unwrap();
        seed_catalog(&store).await.unwrap();

        assert_eq!(store.find_all().await.unwrap().len(), SEED_TITLES.len());
    }
}
