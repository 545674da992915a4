use axum::{
    Json,
    response::{IntoResponse, Redirect},
};
use serde_json::json;
use videx_core::api::routes::site;

pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// The index has no landing page of its own; send visitors to the categories.
pub async fn home_redirect() -> Redirect {
    Redirect::to(site::category::LIST)
}
