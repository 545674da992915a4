//! Process-local catalog used by tests and by dev mode without a database.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use videx_model::speaker::{initial_of, upper_bucket};
use videx_model::{
    Category, CategoryId, CategoryListing, NewCategory, NewRelatedUrl,
    NewSpeaker, NewVideo, RelatedUrl, RelatedUrlId, Speaker, SpeakerId, Video,
    VideoId, VideoSummary,
};

use crate::catalog::sort_listing;
use crate::database::ports::{
    categories::CategoryRepository, speakers::SpeakerRepository,
    videos::VideoRepository,
};
use crate::error::{CatalogError, Result};

#[derive(Default)]
struct Tables {
    categories: BTreeMap<CategoryId, Category>,
    speakers: BTreeMap<SpeakerId, Speaker>,
    videos: BTreeMap<VideoId, Video>,
    last_category: i64,
    last_speaker: i64,
    last_video: i64,
    last_related: i64,
}

/// All three catalog repositories backed by maps behind one lock.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    tables: Arc<RwLock<Tables>>,
}

impl fmt::Debug for InMemoryCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tables = self.tables.read();
        f.debug_struct("InMemoryCatalog")
            .field("categories", &tables.categories.len())
            .field("speakers", &tables.speakers.len())
            .field("videos", &tables.videos.len())
            .finish()
    }
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

fn by_name(a: &Speaker, b: &Speaker) -> std::cmp::Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl CategoryRepository for InMemoryCatalog {
    async fn list(&self) -> Result<Vec<CategoryListing>> {
        let tables = self.tables.read();
        let mut listings: Vec<CategoryListing> = tables
            .categories
            .values()
            .map(|category| CategoryListing {
                category: category.clone(),
                live_videos: tables
                    .videos
                    .values()
                    .filter(|video| {
                        video.category_id == category.id && video.is_live()
                    })
                    .count() as i64,
            })
            .collect();

        listings.sort_by(|a, b| {
            a.category
                .title
                .to_lowercase()
                .cmp(&b.category.title.to_lowercase())
                .then_with(|| a.category.id.cmp(&b.category.id))
        });
        Ok(listings)
    }

    async fn get(&self, id: CategoryId) -> Result<Option<Category>> {
        Ok(self.tables.read().categories.get(&id).cloned())
    }

    async fn create(&self, category: NewCategory) -> Result<Category> {
        let mut tables = self.tables.write();
        tables.last_category += 1;
        let created = Category {
            id: CategoryId(tables.last_category),
            slug: category.resolved_slug(),
            title: category.title,
            description: category.description,
            url: category.url,
            start_date: category.start_date,
        };
        tables.categories.insert(created.id, created.clone());
        Ok(created)
    }
}

#[async_trait]
impl SpeakerRepository for InMemoryCatalog {
    async fn initials(&self) -> Result<Vec<String>> {
        let tables = self.tables.read();
        let initials: BTreeSet<String> = tables
            .speakers
            .values()
            .filter_map(|speaker| initial_of(&speaker.name))
            .collect();
        Ok(initials.into_iter().collect())
    }

    async fn list_by_initial(&self, initial: &str) -> Result<Vec<Speaker>> {
        let wanted = upper_bucket(initial);
        let tables = self.tables.read();
        let mut speakers: Vec<Speaker> = tables
            .speakers
            .values()
            .filter(|speaker| {
                initial_of(&speaker.name).as_deref() == Some(wanted.as_str())
            })
            .cloned()
            .collect();
        speakers.sort_by(by_name);
        Ok(speakers)
    }

    async fn list(&self) -> Result<Vec<Speaker>> {
        let mut speakers: Vec<Speaker> =
            self.tables.read().speakers.values().cloned().collect();
        speakers.sort_by(by_name);
        Ok(speakers)
    }

    async fn get(&self, id: SpeakerId) -> Result<Option<Speaker>> {
        Ok(self.tables.read().speakers.get(&id).cloned())
    }

    async fn list_for_video(&self, video_id: VideoId) -> Result<Vec<Speaker>> {
        let tables = self.tables.read();
        let Some(video) = tables.videos.get(&video_id) else {
            return Ok(Vec::new());
        };
        let mut speakers: Vec<Speaker> = video
            .speaker_ids
            .iter()
            .filter_map(|id| tables.speakers.get(id).cloned())
            .collect();
        speakers.sort_by(by_name);
        Ok(speakers)
    }

    async fn create(&self, speaker: NewSpeaker) -> Result<Speaker> {
        let mut tables = self.tables.write();
        tables.last_speaker += 1;
        let created = Speaker {
            id: SpeakerId(tables.last_speaker),
            slug: speaker.resolved_slug(),
            name: speaker.name,
        };
        tables.speakers.insert(created.id, created.clone());
        Ok(created)
    }
}

#[async_trait]
impl VideoRepository for InMemoryCatalog {
    async fn get(&self, id: VideoId) -> Result<Option<Video>> {
        Ok(self.tables.read().videos.get(&id).cloned())
    }

    async fn list_live_for_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<VideoSummary>> {
        let mut videos: Vec<VideoSummary> = self
            .tables
            .read()
            .videos
            .values()
            .filter(|video| video.category_id == category_id && video.is_live())
            .map(Video::summary_view)
            .collect();
        sort_listing(&mut videos);
        Ok(videos)
    }

    async fn list_live_for_speaker(
        &self,
        speaker_id: SpeakerId,
    ) -> Result<Vec<VideoSummary>> {
        let mut videos: Vec<VideoSummary> = self
            .tables
            .read()
            .videos
            .values()
            .filter(|video| {
                video.is_live() && video.speaker_ids.contains(&speaker_id)
            })
            .map(Video::summary_view)
            .collect();
        sort_listing(&mut videos);
        Ok(videos)
    }

    async fn list_all(&self) -> Result<Vec<Video>> {
        Ok(self.tables.read().videos.values().cloned().collect())
    }

    async fn create(&self, video: NewVideo) -> Result<Video> {
        let mut tables = self.tables.write();
        if !tables.categories.contains_key(&video.category_id) {
            return Err(CatalogError::NotFound(format!(
                "category {}",
                video.category_id
            )));
        }

        tables.last_video += 1;
        let created = Video {
            id: VideoId(tables.last_video),
            slug: video.resolved_slug(),
            title: video.title,
            summary: video.summary,
            description: video.description,
            state: video.state,
            category_id: video.category_id,
            speaker_ids: Vec::new(),
            media: video.media,
            related_urls: Vec::new(),
            recorded: video.recorded,
            thumbnail_url: video.thumbnail_url,
            duration_secs: video.duration_secs,
            source_url: video.source_url,
            added: Utc::now(),
        };
        tables.videos.insert(created.id, created.clone());
        Ok(created)
    }

    async fn add_speaker(
        &self,
        video_id: VideoId,
        speaker_id: SpeakerId,
    ) -> Result<()> {
        let mut tables = self.tables.write();
        if !tables.speakers.contains_key(&speaker_id) {
            return Err(CatalogError::NotFound(format!("speaker {speaker_id}")));
        }
        let video = tables
            .videos
            .get_mut(&video_id)
            .ok_or_else(|| CatalogError::NotFound(format!("video {video_id}")))?;
        if !video.speaker_ids.contains(&speaker_id) {
            video.speaker_ids.push(speaker_id);
        }
        Ok(())
    }

    async fn add_related_url(
        &self,
        video_id: VideoId,
        related: NewRelatedUrl,
    ) -> Result<RelatedUrl> {
        let mut tables = self.tables.write();
        if !tables.videos.contains_key(&video_id) {
            return Err(CatalogError::NotFound(format!("video {video_id}")));
        }
        tables.last_related += 1;
        let created = RelatedUrl {
            id: RelatedUrlId(tables.last_related),
            video_id,
            url: related.url,
            description: related.description,
        };
        if let Some(video) = tables.videos.get_mut(&video_id) {
            video.related_urls.push(created.clone());
        }
        Ok(created)
    }
}
