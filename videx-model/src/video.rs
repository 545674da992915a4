use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::ModelError;
use crate::ids::{CategoryId, RelatedUrlId, SpeakerId, VideoId};
use crate::slug::slugify;

/// Publication state of a video. Only [`VideoState::Live`] videos are
/// listed on category and speaker pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum VideoState {
    Live,
    #[default]
    Draft,
}

impl VideoState {
    pub fn as_str(self) -> &'static str {
        match self {
            VideoState::Live => "live",
            VideoState::Draft => "draft",
        }
    }

    pub fn is_live(self) -> bool {
        matches!(self, VideoState::Live)
    }
}

impl fmt::Display for VideoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoState {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "live" => Ok(VideoState::Live),
            "draft" => Ok(VideoState::Draft),
            other => Err(ModelError::InvalidState(other.to_string())),
        }
    }
}

/// Container format of a media file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MediaFormat {
    Ogv,
    Mp4,
    Webm,
    Flv,
}

impl MediaFormat {
    pub const ALL: [MediaFormat; 4] = [
        MediaFormat::Ogv,
        MediaFormat::Mp4,
        MediaFormat::Webm,
        MediaFormat::Flv,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MediaFormat::Ogv => "ogv",
            MediaFormat::Mp4 => "mp4",
            MediaFormat::Webm => "webm",
            MediaFormat::Flv => "flv",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaFormat::Ogv => "Ogg Theora",
            MediaFormat::Mp4 => "MP4",
            MediaFormat::Webm => "WebM",
            MediaFormat::Flv => "Flash Video",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            MediaFormat::Ogv => "video/ogg",
            MediaFormat::Mp4 => "video/mp4",
            MediaFormat::Webm => "video/webm",
            MediaFormat::Flv => "video/x-flv",
        }
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaFormat {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        MediaFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == raw)
            .ok_or_else(|| ModelError::InvalidMediaFormat(raw.to_string()))
    }
}

/// A downloadable or playable media file for a video.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaUrl {
    pub format: MediaFormat,
    pub url: String,
    /// Size in bytes when known.
    pub length: Option<i64>,
    /// Download-only files are excluded from the inline player.
    pub download_only: bool,
}

impl MediaUrl {
    pub fn new(format: MediaFormat, url: impl Into<String>) -> Self {
        Self {
            format,
            url: url.into(),
            length: None,
            download_only: false,
        }
    }

    pub fn download_only(mut self, download_only: bool) -> Self {
        self.download_only = download_only;
        self
    }

    /// Every format feeds the player unless marked download-only.
    pub fn is_playable(&self) -> bool {
        !self.download_only
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelatedUrl {
    pub id: RelatedUrlId,
    pub video_id: VideoId,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct NewRelatedUrl {
    pub url: String,
    pub description: String,
}

impl NewRelatedUrl {
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub description: String,
    pub state: VideoState,
    pub category_id: CategoryId,
    pub speaker_ids: Vec<SpeakerId>,
    /// Ordered by [`MediaFormat`]; at most one entry per format.
    pub media: Vec<MediaUrl>,
    pub related_urls: Vec<RelatedUrl>,
    pub recorded: Option<NaiveDate>,
    pub thumbnail_url: Option<String>,
    pub duration_secs: Option<i64>,
    pub source_url: Option<String>,
    pub added: DateTime<Utc>,
}

impl Video {
    pub fn absolute_url(&self) -> String {
        format!("/video/{}/{}/", self.id, self.slug)
    }

    pub fn is_live(&self) -> bool {
        self.state.is_live()
    }

    /// Media rendered as `<source>` elements of the inline player.
    pub fn playable_media(&self) -> impl Iterator<Item = &MediaUrl> {
        self.media.iter().filter(|media| media.is_playable())
    }

    /// Every media file, playable or not, for the downloads listing.
    pub fn downloads(&self) -> &[MediaUrl] {
        &self.media
    }

    pub fn summary_view(&self) -> VideoSummary {
        VideoSummary {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            summary: self.summary.clone(),
            state: self.state,
            recorded: self.recorded,
            thumbnail_url: self.thumbnail_url.clone(),
        }
    }
}

/// Listing projection of a [`Video`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VideoSummary {
    pub id: VideoId,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub state: VideoState,
    pub recorded: Option<NaiveDate>,
    pub thumbnail_url: Option<String>,
}

impl VideoSummary {
    pub fn absolute_url(&self) -> String {
        format!("/video/{}/{}/", self.id, self.slug)
    }
}

/// Data required to insert a new [`Video`].
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub title: String,
    pub slug: Option<String>,
    pub summary: String,
    pub description: String,
    pub state: VideoState,
    pub category_id: CategoryId,
    pub media: Vec<MediaUrl>,
    pub recorded: Option<NaiveDate>,
    pub thumbnail_url: Option<String>,
    pub duration_secs: Option<i64>,
    pub source_url: Option<String>,
}

impl NewVideo {
    pub fn new(category_id: CategoryId, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: None,
            summary: String::new(),
            description: String::new(),
            state: VideoState::default(),
            category_id,
            media: Vec::new(),
            recorded: None,
            thumbnail_url: None,
            duration_secs: None,
            source_url: None,
        }
    }

    pub fn with_state(mut self, state: VideoState) -> Self {
        self.state = state;
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_recorded(mut self, recorded: NaiveDate) -> Self {
        self.recorded = Some(recorded);
        self
    }

    /// Attach a media file, replacing any previous file of the same format.
    pub fn with_media(mut self, media: MediaUrl) -> Self {
        self.media.retain(|existing| existing.format != media.format);
        self.media.push(media);
        self.media.sort_by_key(|media| media.format);
        self
    }

    pub fn resolved_slug(&self) -> String {
        match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slugify(slug),
            _ => slugify(&self.title),
        }
    }
}
