use async_trait::async_trait;
use videx_model::{NewSpeaker, Speaker, SpeakerId, VideoId};

use crate::error::Result;

#[async_trait]
pub trait SpeakerRepository: Send + Sync {
    /// Distinct upper-cased first characters of all non-blank speaker names,
    /// sorted ascending.
    async fn initials(&self) -> Result<Vec<String>>;

    /// Speakers whose name starts with `initial` (case-insensitive), ordered
    /// by name.
    async fn list_by_initial(&self, initial: &str) -> Result<Vec<Speaker>>;

    /// Every speaker ordered by name.
    async fn list(&self) -> Result<Vec<Speaker>>;

    async fn get(&self, id: SpeakerId) -> Result<Option<Speaker>>;

    /// Speakers credited on a video, ordered by name.
    async fn list_for_video(&self, video_id: VideoId) -> Result<Vec<Speaker>>;

    async fn create(&self, speaker: NewSpeaker) -> Result<Speaker>;
}
