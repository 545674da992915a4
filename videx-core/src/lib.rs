//! # Videx Core
//!
//! Core library for the Videx video index: catalog storage, the listing
//! rules shared by every page, and full-text search.
//!
//! ## Feature Flags
//!
//! - `database`: PostgreSQL repositories and migrations via SQLx
//!
//! ## Architecture
//!
//! - [`database`]: repository ports with in-memory and PostgreSQL adapters
//! - [`application`]: the [`CatalogStore`] facade handed to request handlers
//! - [`catalog`]: ordering and speaker-initial filtering
//! - [`search`]: the tantivy-backed index and suggestion lookup
//! - [`api`]: route constants shared by the server and its tests
//!
//! ```no_run
//! use videx_core::{CatalogStore, search::{TantivySearchIndex, rebuild_index}};
//!
//! async fn reindex() -> videx_core::Result<()> {
//!     let store = CatalogStore::in_memory();
//!     let index = TantivySearchIndex::open("./data/search-index")?;
//!     rebuild_index(&store, &index).await?;
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Route constants for the site and the JSON API
pub mod api;

/// Repository facade used by the server
pub mod application;

/// Listing order and speaker filtering
pub mod catalog;

/// Repository ports and storage adapters
pub mod database;

/// Error types
pub mod error;

/// Full-text search and suggestions
pub mod search;

#[cfg(feature = "database")]
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub use application::CatalogStore;
pub use error::{CatalogError, Result};
pub use videx_model as model;
