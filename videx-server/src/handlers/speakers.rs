use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;
use videx_core::catalog::load_speaker_index;
use videx_model::SpeakerId;

use super::DetailPath;
use crate::infra::{app_state::AppState, errors::{PageError, PageResult}};
use crate::views::{InitialLink, SiteContext, SpeakerListPage, SpeakerPage, render};

#[derive(Debug, Default, Deserialize)]
pub struct SpeakerListQuery {
    pub character: Option<String>,
}

pub async fn list_speakers(
    State(state): State<AppState>,
    Query(query): Query<SpeakerListQuery>,
) -> PageResult<Html<String>> {
    let index =
        load_speaker_index(state.store.speakers.as_ref(), query.character.as_deref())
            .await?;
    let site = SiteContext::from_config(state.config());

    render(&SpeakerListPage {
        site: &site,
        initials: InitialLink::build(&index.initials, index.current.as_deref()),
        speakers: &index.speakers,
    })
}

pub async fn speaker_detail(
    State(state): State<AppState>,
    Path(path): Path<DetailPath>,
) -> PageResult<Html<String>> {
    let id: SpeakerId = path.parse_id("speaker")?;
    let speaker = state
        .store
        .speakers
        .get(id)
        .await?
        .ok_or_else(|| PageError::not_found(format!("speaker {id} not found")))?;

    let videos = state.store.videos.list_live_for_speaker(id).await?;
    let site = SiteContext::from_config(state.config());

    render(&SpeakerPage {
        site: &site,
        speaker: &speaker,
        videos: &videos,
    })
}
