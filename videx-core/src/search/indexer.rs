use std::collections::HashMap;

use tracing::info;
use videx_model::{CategoryId, SpeakerId, Video, VideoId};

use super::document::SearchDocument;
use super::index::SearchIndex;
use crate::application::CatalogStore;
use crate::error::Result;

/// Build one [`SearchDocument`] per video in the catalog, whatever its state.
pub async fn build_documents(store: &CatalogStore) -> Result<Vec<SearchDocument>> {
    let categories: HashMap<CategoryId, String> = store
        .categories
        .list()
        .await?
        .into_iter()
        .map(|listing| (listing.category.id, listing.category.title))
        .collect();
    let speakers: HashMap<SpeakerId, String> = store
        .speakers
        .list()
        .await?
        .into_iter()
        .map(|speaker| (speaker.id, speaker.name))
        .collect();

    let videos = store.videos.list_all().await?;
    Ok(videos
        .iter()
        .map(|video| document_for(video, &categories, &speakers))
        .collect())
}

fn document_for(
    video: &Video,
    categories: &HashMap<CategoryId, String>,
    speakers: &HashMap<SpeakerId, String>,
) -> SearchDocument {
    let names = video
        .speaker_ids
        .iter()
        .filter_map(|id| speakers.get(id).cloned())
        .collect();
    SearchDocument::from_video(
        video,
        categories.get(&video.category_id).map(String::as_str),
        names,
    )
}

/// Replace the contents of `index` with the current catalog.
pub async fn rebuild_index(
    store: &CatalogStore,
    index: &dyn SearchIndex,
) -> Result<usize> {
    let documents = build_documents(store).await?;
    let count = documents.len();
    index.rebuild(documents)?;
    info!(documents = count, "search index rebuilt");
    Ok(count)
}

/// Refresh the document for one video, dropping it if the video is gone.
pub async fn reindex_video(
    store: &CatalogStore,
    index: &dyn SearchIndex,
    video_id: VideoId,
) -> Result<()> {
    let Some(video) = store.videos.get(video_id).await? else {
        return index.remove(video_id);
    };

    let category = store.categories.get(video.category_id).await?;
    let speakers = store
        .speakers
        .list_for_video(video_id)
        .await?
        .into_iter()
        .map(|speaker| speaker.name)
        .collect();

    index.upsert(SearchDocument::from_video(
        &video,
        category.as_ref().map(|category| category.title.as_str()),
        speakers,
    ))
}
