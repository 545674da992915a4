pub mod sources;

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_INDEX_PATH: &str = "./data/search-index";
pub const DEFAULT_SUGGESTIONS_LIMIT: usize = 10;
pub const DEFAULT_RESULTS_PER_PAGE: usize = 20;
pub const DEFAULT_SITE_TITLE: &str = "Videx";
pub const DEFAULT_SITE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub search: SearchConfig,
    pub site: SiteConfig,
    pub cors: CorsConfig,
    pub dev_mode: bool,
    pub metadata: ConfigMetadata,
}

impl Config {
    /// Apply command-line overrides, which win over every other source.
    pub fn apply_overrides(&mut self, host: Option<String>, port: Option<u16>) {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
    }

    /// The in-memory catalog is only acceptable in dev mode without a
    /// database URL.
    pub fn uses_in_memory_store(&self) -> bool {
        self.dev_mode && self.database.url.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Directory holding the persisted index.
    pub index_path: PathBuf,
    pub enable_suggestions: bool,
    pub suggestions_limit: usize,
    pub results_per_page: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
            enable_suggestions: false,
            suggestions_limit: DEFAULT_SUGGESTIONS_LIMIT,
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub title: String,
    /// Public base URL, without a trailing slash.
    pub url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_SITE_TITLE.to_string(),
            url: DEFAULT_SITE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn is_wildcard_included(&self) -> bool {
        self.allowed_origins
            .iter()
            .any(|origin| origin.trim() == "*")
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_server_settings() {
        let mut config = Config::default();
        config.apply_overrides(Some("127.0.0.1".into()), Some(9000));
        assert_eq!(config.server.bind_address(), "127.0.0.1:9000");

        config.apply_overrides(None, None);
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn in_memory_store_requires_dev_mode_without_database() {
        let mut config = Config::default();
        assert!(!config.uses_in_memory_store());
        config.dev_mode = true;
        assert!(config.uses_in_memory_store());
        config.database.url = Some("postgres://localhost/videx".into());
        assert!(!config.uses_in_memory_store());
    }
}
