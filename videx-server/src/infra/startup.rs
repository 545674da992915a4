//! Process bootstrap: logging, storage backends and the search index.

use std::sync::Arc;

use anyhow::{Context, bail};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use videx_config::{Config, ConfigWarnings};
use videx_core::{
    CatalogStore,
    database::PostgresDatabase,
    search::{SearchIndex, TantivySearchIndex},
};

use super::app_state::AppState;

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub fn log_config(config: &Config, warnings: &ConfigWarnings) {
    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file loaded");
    }

    for warning in warnings.iter() {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }

    info!(
        search.index_path = %config.search.index_path.display(),
        search.suggestions = config.search.enable_suggestions,
        search.results_per_page = config.search.results_per_page,
        dev_mode = config.dev_mode,
        "search configuration in effect"
    );
}

/// Connect to PostgreSQL; fails when no URL is configured.
pub async fn connect_database(config: &Config) -> anyhow::Result<PostgresDatabase> {
    let Some(url) = config.database.url.as_deref() else {
        bail!("DATABASE_URL is not configured");
    };
    PostgresDatabase::new(url, config.database.max_connections)
        .await
        .context("failed to connect to PostgreSQL")
}

/// Pick the catalog backend: PostgreSQL, or the in-memory store in dev mode.
pub async fn open_store(config: &Config) -> anyhow::Result<CatalogStore> {
    if config.uses_in_memory_store() {
        warn!("DEV_MODE without DATABASE_URL; catalog is in-memory and starts empty");
        return Ok(CatalogStore::in_memory());
    }

    let database = connect_database(config).await?;
    database
        .initialize_schema()
        .await
        .context("database migration failed")?;
    Ok(CatalogStore::from_postgres(&database))
}

pub fn open_search_index(config: &Config) -> anyhow::Result<Arc<dyn SearchIndex>> {
    let index = TantivySearchIndex::open(&config.search.index_path).with_context(|| {
        format!(
            "failed to open search index at {}",
            config.search.index_path.display()
        )
    })?;
    Ok(Arc::new(index))
}

pub async fn build_state(config: Config) -> anyhow::Result<AppState> {
    let store = open_store(&config).await?;
    let search = open_search_index(&config)?;
    if search.is_empty() {
        warn!("search index is empty; run `videx-server index rebuild` to populate it");
    }
    Ok(AppState::new(store, search, Arc::new(config)))
}

/// Resolves on Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(
            tokio::signal::unix::SignalKind::terminate(),
        ) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => warn!(error = %err, "failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
