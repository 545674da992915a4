use axum::{
    extract::{Path, State},
    response::Html,
};
use videx_model::VideoId;

use super::DetailPath;
use crate::infra::{app_state::AppState, errors::{PageError, PageResult}};
use crate::views::{SiteContext, VideoPage, render};

/// Video detail page. Drafts are reachable here even though listings hide them.
pub async fn video_detail(
    State(state): State<AppState>,
    Path(path): Path<DetailPath>,
) -> PageResult<Html<String>> {
    let id: VideoId = path.parse_id("video")?;
    let video = state
        .store
        .videos
        .get(id)
        .await?
        .ok_or_else(|| PageError::not_found(format!("video {id} not found")))?;

    let category = state.store.categories.get(video.category_id).await?;
    let speakers = state.store.speakers.list_for_video(id).await?;
    let site = SiteContext::from_config(state.config());

    render(&VideoPage::new(&site, &video, category.as_ref(), &speakers))
}
