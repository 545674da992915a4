use std::{fmt, sync::Arc};

use videx_config::Config;
use videx_core::{CatalogStore, search::SearchIndex};

/// Shared request state; cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: CatalogStore,
    pub search: Arc<dyn SearchIndex>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store)
            .field("indexed_documents", &self.search.len())
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(
        store: CatalogStore,
        search: Arc<dyn SearchIndex>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            store,
            search,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
