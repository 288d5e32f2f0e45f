use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
