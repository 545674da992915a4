use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use videx_model::{Video, VideoId, VideoState};

/// Denormalised, self-contained view of a video as stored in the index.
///
/// Search result pages render straight from documents, so everything a
/// result row shows has to be copied in at indexing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDocument {
    pub video_id: VideoId,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub description: String,
    pub category: String,
    pub speakers: Vec<String>,
    pub state: VideoState,
    pub recorded: Option<NaiveDate>,
}

impl SearchDocument {
    pub fn from_video(
        video: &Video,
        category: Option<&str>,
        speakers: Vec<String>,
    ) -> Self {
        Self {
            video_id: video.id,
            title: video.title.clone(),
            slug: video.slug.clone(),
            summary: video.summary.clone(),
            description: video.description.clone(),
            category: category.unwrap_or_default().to_string(),
            speakers,
            state: video.state,
            recorded: video.recorded,
        }
    }

    pub fn absolute_url(&self) -> String {
        format!("/video/{}/{}/", self.video_id, self.slug)
    }

    /// Text outside the title that participates in full-text matching.
    pub(crate) fn body_text(&self) -> String {
        let mut body = String::with_capacity(
            self.summary.len() + self.description.len() + self.category.len(),
        );
        body.push_str(&self.summary);
        body.push(' ');
        body.push_str(&self.description);
        body.push(' ');
        body.push_str(&self.category);
        for speaker in &self.speakers {
            body.push(' ');
            body.push_str(speaker);
        }
        body
    }
}
