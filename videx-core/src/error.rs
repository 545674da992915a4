use thiserror::Error;
use videx_model::ModelError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[cfg(feature = "database")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[cfg(feature = "database")]
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Search index error: {0}")]
    Search(String),
}

impl From<tantivy::TantivyError> for CatalogError {
    fn from(err: tantivy::TantivyError) -> Self {
        CatalogError::Search(err.to_string())
    }
}

impl From<ModelError> for CatalogError {
    fn from(err: ModelError) -> Self {
        CatalogError::InvalidData(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
