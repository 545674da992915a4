use axum::{
    extract::{Path, State},
    response::Html,
};
use tracing::debug;
use videx_model::CategoryId;

use super::DetailPath;
use crate::infra::{app_state::AppState, errors::{PageError, PageResult}};
use crate::views::{CategoryListPage, CategoryPage, SiteContext, render};

pub async fn list_categories(
    State(state): State<AppState>,
) -> PageResult<Html<String>> {
    let categories = state.store.categories.list().await?;
    let site = SiteContext::from_config(state.config());

    render(&CategoryListPage {
        site: &site,
        categories: &categories,
    })
}

pub async fn category_detail(
    State(state): State<AppState>,
    Path(path): Path<DetailPath>,
) -> PageResult<Html<String>> {
    let id: CategoryId = path.parse_id("category")?;
    let category = state
        .store
        .categories
        .get(id)
        .await?
        .ok_or_else(|| PageError::not_found(format!("category {id} not found")))?;

    if path.slug.as_deref().is_some_and(|slug| slug != category.slug) {
        debug!(%id, requested = ?path.slug, canonical = %category.slug, "category slug mismatch");
    }

    let videos = state.store.videos.list_live_for_category(id).await?;
    let site = SiteContext::from_config(state.config());

    render(&CategoryPage {
        site: &site,
        category: &category,
        videos: &videos,
    })
}
