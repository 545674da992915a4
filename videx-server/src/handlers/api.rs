//! Read-only JSON API. Errors use the [`AppError`] JSON envelope.

use axum::{
    Json,
    extract::{Path, State},
};
use videx_core::api::{ApiResponse, CategoryDetail, VideoDetail};
use videx_model::{CategoryId, CategoryListing, Speaker, SpeakerId, VideoId};

use super::parse_id;
use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<CategoryListing>>>> {
    let categories = state.store.categories.list().await?;
    Ok(Json(ApiResponse::success(categories)))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<CategoryDetail>>> {
    let id: CategoryId = parse_id("category", &id)?;
    let category = state
        .store
        .categories
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("category {id} not found")))?;
    let videos = state.store.videos.list_live_for_category(id).await?;

    Ok(Json(ApiResponse::success(CategoryDetail { category, videos })))
}

pub async fn list_speakers(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Speaker>>>> {
    let speakers = state.store.speakers.list().await?;
    Ok(Json(ApiResponse::success(speakers)))
}

pub async fn get_speaker(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Speaker>>> {
    let id: SpeakerId = parse_id("speaker", &id)?;
    let speaker = state
        .store
        .speakers
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("speaker {id} not found")))?;

    Ok(Json(ApiResponse::success(speaker)))
}

pub async fn get_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<VideoDetail>>> {
    let id: VideoId = parse_id("video", &id)?;
    let video = state
        .store
        .videos
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("video {id} not found")))?;
    let category = state.store.categories.get(video.category_id).await?;
    let speakers = state.store.speakers.list_for_video(id).await?;

    Ok(Json(ApiResponse::success(VideoDetail {
        video,
        category,
        speakers,
    })))
}
