use std::any::type_name_of_val;
use std::fmt;
use std::sync::Arc;

use crate::database::InMemoryCatalog;
#[cfg(feature = "database")]
use crate::database::infrastructure::postgres::{
    PostgresCategoryRepository, PostgresSpeakerRepository,
    PostgresVideoRepository,
};
use crate::database::ports::{
    categories::CategoryRepository, speakers::SpeakerRepository,
    videos::VideoRepository,
};
#[cfg(feature = "database")]
use crate::database::postgres::PostgresDatabase;

/// Aggregates the catalog repository ports used by handlers and services.
#[derive(Clone)]
pub struct CatalogStore {
    pub categories: Arc<dyn CategoryRepository>,
    pub speakers: Arc<dyn SpeakerRepository>,
    pub videos: Arc<dyn VideoRepository>,
}

impl fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogStore")
            .field("categories", &type_name_of_val(self.categories.as_ref()))
            .field("speakers", &type_name_of_val(self.speakers.as_ref()))
            .field("videos", &type_name_of_val(self.videos.as_ref()))
            .finish()
    }
}

impl CatalogStore {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        speakers: Arc<dyn SpeakerRepository>,
        videos: Arc<dyn VideoRepository>,
    ) -> Self {
        Self {
            categories,
            speakers,
            videos,
        }
    }

    #[cfg(feature = "database")]
    pub fn from_postgres(database: &PostgresDatabase) -> Self {
        let pool = database.pool().clone();
        Self::new(
            Arc::new(PostgresCategoryRepository::new(pool.clone())),
            Arc::new(PostgresSpeakerRepository::new(pool.clone())),
            Arc::new(PostgresVideoRepository::new(pool)),
        )
    }

    /// All repositories share one [`InMemoryCatalog`] so that cross-entity
    /// lookups (e.g. live videos per speaker) see the same data.
    pub fn in_memory() -> Self {
        Self::from_memory(InMemoryCatalog::new())
    }

    pub fn from_memory(catalog: InMemoryCatalog) -> Self {
        let shared = Arc::new(catalog);
        Self::new(shared.clone(), shared.clone(), shared)
    }
}
