use async_trait::async_trait;
use videx_model::{
    CategoryId, NewRelatedUrl, NewVideo, RelatedUrl, SpeakerId, Video,
    VideoId, VideoSummary,
};

use crate::error::Result;

#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Load a video with its media, related links and speaker ids. Detail
    /// lookups ignore the publication state.
    async fn get(&self, id: VideoId) -> Result<Option<Video>>;

    /// Live videos of a category, most recently recorded first.
    async fn list_live_for_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<VideoSummary>>;

    /// Live videos credited to a speaker, most recently recorded first.
    async fn list_live_for_speaker(
        &self,
        speaker_id: SpeakerId,
    ) -> Result<Vec<VideoSummary>>;

    /// Every video in every state, used to (re)build the search index.
    async fn list_all(&self) -> Result<Vec<Video>>;

    /// Insert a video. Fails with `NotFound` when the category is unknown.
    async fn create(&self, video: NewVideo) -> Result<Video>;

    /// Credit a speaker on a video. Adding an existing credit is a no-op.
    async fn add_speaker(
        &self,
        video_id: VideoId,
        speaker_id: SpeakerId,
    ) -> Result<()>;

    async fn add_related_url(
        &self,
        video_id: VideoId,
        related: NewRelatedUrl,
    ) -> Result<RelatedUrl>;
}
