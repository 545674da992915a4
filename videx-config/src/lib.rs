//! Configuration for the Videx server.
//!
//! Values are layered: built-in defaults, then an optional `videx.toml`,
//! then environment variables (a `.env` file is loaded first when present).
//! Command-line overrides are applied by the binary on top of the result.

#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    Config, ConfigMetadata, CorsConfig, DatabaseConfig, SearchConfig,
    ServerConfig, SiteConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
