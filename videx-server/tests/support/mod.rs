#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Result, anyhow};
use axum_test::TestServer;
use chrono::NaiveDate;
use tempfile::TempDir;
use videx_config::Config;
use videx_core::{
    CatalogStore,
    search::{SearchIndex, TantivySearchIndex, rebuild_index},
};
use videx_model::{
    Category, CategoryId, MediaUrl, NewCategory, NewRelatedUrl, NewSpeaker,
    NewVideo, Speaker, Video, VideoState,
};
use videx_server::{AppState, create_app};

/// Running app over the in-memory catalog; the index directory lives as long
/// as this value.
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    _index_dir: TempDir,
}

impl TestApp {
    pub fn store(&self) -> &CatalogStore {
        &self.state.store
    }

    /// Reindex everything currently in the store.
    pub async fn reindex(&self) -> Result<usize> {
        Ok(rebuild_index(&self.state.store, self.state.search.as_ref()).await?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestAppBuilder {
    suggestions: bool,
    store: Option<CatalogStore>,
}

impl TestAppBuilder {
    pub fn with_suggestions(mut self, enabled: bool) -> Self {
        self.suggestions = enabled;
        self
    }

    pub fn with_store(mut self, store: CatalogStore) -> Self {
        self.store = Some(store);
        self
    }

    pub async fn build(self) -> Result<TestApp> {
        let index_dir = tempfile::tempdir()?;

        let mut config = Config::default();
        config.dev_mode = true;
        config.site.url = "http://videos.test".into();
        config.search.index_path = index_dir.path().to_path_buf();
        config.search.enable_suggestions = self.suggestions;

        let search: Arc<dyn SearchIndex> =
            Arc::new(TantivySearchIndex::open(index_dir.path())?);
        let store = self.store.unwrap_or_else(CatalogStore::in_memory);
        let state = AppState::new(store, search, Arc::new(config));

        let server = TestServer::new(create_app(state.clone()))
            .map_err(|err| anyhow!(err.to_string()))?;

        Ok(TestApp {
            server,
            state,
            _index_dir: index_dir,
        })
    }
}

pub async fn build_test_app() -> Result<TestApp> {
    TestAppBuilder::default().build().await
}

pub async fn create_category(store: &CatalogStore, title: &str) -> Result<Category> {
    Ok(store
        .categories
        .create(NewCategory::new(title).with_description(format!("{title} talks")))
        .await?)
}

pub async fn create_speaker(store: &CatalogStore, name: &str) -> Result<Speaker> {
    Ok(store.speakers.create(NewSpeaker::new(name)).await?)
}

/// Builder over [`NewVideo`] that also attaches speakers and related links.
#[derive(Debug, Clone)]
pub struct VideoFactory {
    video: NewVideo,
    speakers: Vec<Speaker>,
    related: Vec<NewRelatedUrl>,
}

impl VideoFactory {
    pub fn new(category: CategoryId, title: &str) -> Self {
        Self {
            video: NewVideo::new(category, title)
                .with_state(VideoState::Live)
                .with_recorded(NaiveDate::from_ymd_opt(2012, 3, 9).unwrap()),
            speakers: Vec::new(),
            related: Vec::new(),
        }
    }

    pub fn draft(mut self) -> Self {
        self.video = self.video.with_state(VideoState::Draft);
        self
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.video = self.video.with_summary(summary);
        self
    }

    pub fn media(mut self, media: MediaUrl) -> Self {
        self.video = self.video.with_media(media);
        self
    }

    pub fn speaker(mut self, speaker: &Speaker) -> Self {
        self.speakers.push(speaker.clone());
        self
    }

    pub fn related(mut self, url: &str, description: &str) -> Self {
        self.related.push(NewRelatedUrl::new(url, description));
        self
    }

    pub async fn create(self, store: &CatalogStore) -> Result<Video> {
        let created = store.videos.create(self.video).await?;
        for speaker in &self.speakers {
            store.videos.add_speaker(created.id, speaker.id).await?;
        }
        for related in self.related {
            store.videos.add_related_url(created.id, related).await?;
        }

        store
            .videos
            .get(created.id)
            .await?
            .ok_or_else(|| anyhow!("video {} vanished after insert", created.id))
    }
}
