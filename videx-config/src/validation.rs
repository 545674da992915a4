use thiserror::Error;
use url::Url;

use crate::models::Config;

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("DATABASE_URL is required unless DEV_MODE is enabled")]
    MissingDatabase,
    #[error("DATABASE_URL must use the postgres:// or postgresql:// scheme")]
    UnsupportedDatabaseScheme,
    #[error("invalid DATABASE_URL")]
    InvalidDatabaseUrl {
        #[source]
        source: url::ParseError,
    },
    #[error("invalid SITE_URL '{value}'")]
    InvalidSiteUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("SEARCH_RESULTS_PER_PAGE must be greater than zero")]
    ZeroResultsPerPage,
    #[error("DB_MAX_CONNECTIONS must be greater than zero")]
    ZeroConnections,
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    match &config.database.url {
        Some(raw) => {
            let url = Url::parse(raw).map_err(|source| {
                ConfigGuardRailError::InvalidDatabaseUrl { source }
            })?;
            if !matches!(url.scheme(), "postgres" | "postgresql") {
                return Err(ConfigGuardRailError::UnsupportedDatabaseScheme);
            }
        }
        None if config.dev_mode => warnings.push_with_hint(
            "DATABASE_URL not configured; using an in-memory catalog",
            "Data is lost on restart; set DATABASE_URL for a persistent catalog",
        ),
        None => return Err(ConfigGuardRailError::MissingDatabase),
    }

    if config.database.max_connections == 0 {
        return Err(ConfigGuardRailError::ZeroConnections);
    }

    Url::parse(&config.site.url).map_err(|source| {
        ConfigGuardRailError::InvalidSiteUrl {
            value: config.site.url.clone(),
            source,
        }
    })?;

    if config.search.results_per_page == 0 {
        return Err(ConfigGuardRailError::ZeroResultsPerPage);
    }

    if config.search.enable_suggestions && config.search.suggestions_limit == 0
    {
        warnings.push_with_hint(
            "Search suggestions are enabled with a limit of zero",
            "Set SEARCH_SUGGESTIONS_LIMIT to a positive value",
        );
    }

    if config.cors.is_wildcard_included() && !config.dev_mode {
        warnings.push(
            "CORS_ALLOWED_ORIGINS contains '*'; any origin may call the JSON API",
        );
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn production() -> Config {
        let mut config = Config::default();
        config.database.url = Some("postgres://videx@localhost/videx".into());
        config
    }

    #[test]
    fn production_requires_database() {
        let mut config = production();
        config.database.url = None;
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::MissingDatabase)
        ));
    }

    #[test]
    fn dev_mode_without_database_warns() {
        let mut config = Config::default();
        config.dev_mode = true;
        let warnings = apply_guard_rails(&config).unwrap();
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn rejects_non_postgres_database() {
        let mut config = production();
        config.database.url = Some("mysql://localhost/videx".into());
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::UnsupportedDatabaseScheme)
        ));
    }

    #[test]
    fn rejects_bad_site_url_and_zero_page_size() {
        let mut config = production();
        config.site.url = "not a url".into();
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::InvalidSiteUrl { .. })
        ));

        let mut config = production();
        config.search.results_per_page = 0;
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::ZeroResultsPerPage)
        ));
    }

    #[test]
    fn wildcard_cors_warns_outside_dev_mode() {
        let mut config = production();
        config.cors.allowed_origins = vec!["*".into()];
        let warnings = apply_guard_rails(&config).unwrap();
        assert!(warnings.iter().any(|w| w.message.contains("CORS")));
    }
}
