pub mod api;
pub mod categories;
pub mod health;
pub mod search;
pub mod speakers;
pub mod videos;

use std::str::FromStr;

use serde::Deserialize;

use crate::infra::errors::AppError;

/// Path captured by the slug-tolerant detail routes.
///
/// `slug` is accepted for every route shape but never checked against the
/// stored value.
#[derive(Debug, Deserialize)]
pub struct DetailPath {
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
}

impl DetailPath {
    pub fn parse_id<T: FromStr>(&self, kind: &str) -> Result<T, AppError> {
        parse_id(kind, &self.id)
    }
}

/// Parse a path identifier; malformed ids are reported as missing entities.
pub fn parse_id<T: FromStr>(kind: &str, raw: &str) -> Result<T, AppError> {
    raw.parse()
        .map_err(|_| AppError::not_found(format!("{kind} {raw} not found")))
}
