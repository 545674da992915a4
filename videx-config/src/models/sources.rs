use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::util::{
    parse_bool_var, parse_csv_var, parse_var, string_var,
};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub database: FileDatabaseConfig,
    #[serde(default)]
    pub search: FileSearchConfig,
    #[serde(default)]
    pub site: FileSiteConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
    pub dev_mode: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileDatabaseConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileSearchConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_suggestions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions_limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_per_page: Option<usize>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileSiteConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub database_url: Option<String>,
    pub db_max_connections: Option<u32>,
    pub search_index_path: Option<PathBuf>,
    pub enable_suggestions: Option<bool>,
    pub suggestions_limit: Option<usize>,
    pub results_per_page: Option<usize>,
    pub site_title: Option<String>,
    pub site_url: Option<String>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub dev_mode: Option<bool>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            config_path: string_var("VIDEX_CONFIG").map(PathBuf::from),
            server_host: string_var("SERVER_HOST"),
            server_port: parse_var("SERVER_PORT"),
            database_url: string_var("DATABASE_URL"),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS"),
            search_index_path: string_var("SEARCH_INDEX_PATH")
                .map(PathBuf::from),
            enable_suggestions: parse_bool_var("OPENSEARCH_ENABLE_SUGGESTIONS"),
            suggestions_limit: parse_var("SEARCH_SUGGESTIONS_LIMIT"),
            results_per_page: parse_var("SEARCH_RESULTS_PER_PAGE"),
            site_title: string_var("SITE_TITLE"),
            site_url: string_var("SITE_URL"),
            cors_allowed_origins: parse_csv_var("CORS_ALLOWED_ORIGINS"),
            dev_mode: parse_bool_var("DEV_MODE"),
        }
    }
}
