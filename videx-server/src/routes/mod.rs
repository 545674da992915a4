pub mod site;
pub mod v1;

use crate::AppState;
use axum::Router;
use videx_core::api::routes::v1 as api_v1;

/// Create the main API router with all versions
pub fn create_api_router(state: AppState) -> Router<AppState> {
    Router::new().nest(api_v1::ROOT, v1::create_v1_router(state))
}
