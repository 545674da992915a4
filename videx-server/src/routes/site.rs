use axum::{Router, routing::get};
use videx_core::api::routes::site;

use crate::{
    AppState,
    handlers::{categories, health, search, speakers, videos},
};

/// Browsable HTML pages, including every slug-tolerant detail URL shape.
pub fn create_site_router() -> Router<AppState> {
    let mut router = Router::new()
        .route(site::HOME, get(health::home_redirect))
        .route(site::category::LIST, get(categories::list_categories))
        .route(site::category::LIST_NO_SLASH, get(categories::list_categories))
        .route(site::speaker::LIST, get(speakers::list_speakers))
        .route(site::speaker::LIST_NO_SLASH, get(speakers::list_speakers))
        .route(site::search::RESULTS, get(search::search_results))
        .route(site::search::RESULTS_NO_SLASH, get(search::search_results))
        .route(site::search::OPENSEARCH, get(search::opensearch_description))
        .route(site::search::SUGGESTIONS, get(search::suggestions));

    for pattern in site::category::DETAIL_PATTERNS {
        router = router.route(pattern, get(categories::category_detail));
    }
    for pattern in site::speaker::DETAIL_PATTERNS {
        router = router.route(pattern, get(speakers::speaker_detail));
    }
    for pattern in site::video::DETAIL_PATTERNS {
        router = router.route(pattern, get(videos::video_detail));
    }

    router
}
