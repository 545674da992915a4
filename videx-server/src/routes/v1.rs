use axum::{Router, routing::get};
use videx_core::api::routes::{utils::relative_to_root, v1};

use crate::{AppState, handlers::api};

fn route(path: &'static str) -> &'static str {
    relative_to_root(path, v1::ROOT)
}

/// Create all v1 API routes
pub fn create_v1_router(_state: AppState) -> Router<AppState> {
    Router::new()
        .route(route(v1::category::COLLECTION), get(api::list_categories))
        .route(route(v1::category::ITEM), get(api::get_category))
        .route(route(v1::speaker::COLLECTION), get(api::list_speakers))
        .route(route(v1::speaker::ITEM), get(api::get_speaker))
        .route(route(v1::video::ITEM), get(api::get_video))
}
