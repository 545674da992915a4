use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult, PageResult},
};
use crate::views::{OpenSearchDescription, SearchResultsPage, SiteContext, render};

pub const OPENSEARCH_CONTENT_TYPE: &str = "application/opensearchdescription+xml";
pub const SUGGESTIONS_CONTENT_TYPE: &str = "application/x-suggestions+json";

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub page: Option<String>,
}

impl SearchQuery {
    /// One-based page number; anything unparsable means the first page.
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|page| *page > 0)
            .unwrap_or(1)
    }
}

/// HTML results page; always 200, even without matches.
pub async fn search_results(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> PageResult<Html<String>> {
    let terms = query.q.trim();
    let results = state.search.search(
        terms,
        query.page(),
        state.config().search.results_per_page,
    )?;
    debug!(query = terms, total = results.total, page = results.page, "search");

    let site = SiteContext::from_config(state.config());
    render(&SearchResultsPage::new(&site, terms, &results))
}

pub async fn opensearch_description(
    State(state): State<AppState>,
) -> PageResult<Response> {
    let site = SiteContext::from_config(state.config());
    let Html(body) = render(&OpenSearchDescription::new(&site))?;
    Ok(([(header::CONTENT_TYPE, OPENSEARCH_CONTENT_TYPE)], body).into_response())
}

/// `[query, [titles...]]`, or 404 while suggestions are disabled.
pub async fn suggestions(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Response> {
    let settings = &state.config().search;
    if !settings.enable_suggestions {
        return Err(AppError::not_found("search suggestions are disabled"));
    }

    let titles = state.search.suggest(&query.q, settings.suggestions_limit)?;
    let body = json!([query.q, titles]).to_string();
    Ok(([(header::CONTENT_TYPE, SUGGESTIONS_CONTENT_TYPE)], body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_first() {
        let page = |raw: Option<&str>| SearchQuery {
            q: String::new(),
            page: raw.map(str::to_string),
        }
        .page();

        assert_eq!(page(None), 1);
        assert_eq!(page(Some("0")), 1);
        assert_eq!(page(Some("two")), 1);
        assert_eq!(page(Some("3")), 3);
    }
}
