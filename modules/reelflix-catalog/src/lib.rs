pub mod events;
pub mod seed;
pub mod service;
pub mod store;

pub use events::{watch_events, watch_events_with, VIEWERS};
pub use seed::seed_catalog;
pub use service::CatalogService;
pub use store::{CatalogStore, MemoryCatalog};
