use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use videx_model::{
    CategoryId, MediaFormat, MediaUrl, NewRelatedUrl, NewVideo, RelatedUrl,
    RelatedUrlId, SpeakerId, Video, VideoId, VideoState, VideoSummary,
};

use crate::database::ports::videos::VideoRepository;
use crate::error::{CatalogError, Result};

const VIDEO_COLUMNS: &str = r#"
    v.id, v.category_id, v.title, v.slug, v.summary, v.description, v.state,
    v.recorded, v.thumbnail_url, v.duration_secs, v.source_url, v.added
"#;

const SUMMARY_ORDER: &str =
    "ORDER BY v.recorded DESC NULLS LAST, lower(v.title), v.id";

#[derive(Debug, Clone)]
pub struct PostgresVideoRepository {
    pool: PgPool,
}

impl PostgresVideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_video(row: &PgRow) -> Result<Video> {
        let state: String = row.try_get("state")?;
        Ok(Video {
            id: VideoId(row.try_get("id")?),
            title: row.try_get("title")?,
            slug: row.try_get("slug")?,
            summary: row.try_get("summary")?,
            description: row.try_get("description")?,
            state: state.parse::<VideoState>()?,
            category_id: CategoryId(row.try_get("category_id")?),
            speaker_ids: Vec::new(),
            media: Vec::new(),
            related_urls: Vec::new(),
            recorded: row.try_get("recorded")?,
            thumbnail_url: row.try_get("thumbnail_url")?,
            duration_secs: row.try_get("duration_secs")?,
            source_url: row.try_get("source_url")?,
            added: row.try_get("added")?,
        })
    }

    fn map_summary(row: &PgRow) -> Result<VideoSummary> {
        let state: String = row.try_get("state")?;
        Ok(VideoSummary {
            id: VideoId(row.try_get("id")?),
            title: row.try_get("title")?,
            slug: row.try_get("slug")?,
            summary: row.try_get("summary")?,
            state: state.parse::<VideoState>()?,
            recorded: row.try_get("recorded")?,
            thumbnail_url: row.try_get("thumbnail_url")?,
        })
    }

    fn map_media(row: &PgRow) -> Result<(VideoId, MediaUrl)> {
        let format: String = row.try_get("format")?;
        Ok((
            VideoId(row.try_get("video_id")?),
            MediaUrl {
                format: format.parse::<MediaFormat>()?,
                url: row.try_get("url")?,
                length: row.try_get("length")?,
                download_only: row.try_get("download_only")?,
            },
        ))
    }

    fn map_related(row: &PgRow) -> Result<RelatedUrl> {
        Ok(RelatedUrl {
            id: RelatedUrlId(row.try_get("id")?),
            video_id: VideoId(row.try_get("video_id")?),
            url: row.try_get("url")?,
            description: row.try_get("description")?,
        })
    }

    /// Load media, related links and speaker credits for `videos` in three
    /// queries and attach them in place.
    async fn attach_children(&self, videos: &mut [Video]) -> Result<()> {
        if videos.is_empty() {
            return Ok(());
        }
        let ids: Vec<i64> = videos.iter().map(|video| video.id.get()).collect();

        let media_rows = sqlx::query(
            r#"
            SELECT video_id, format, url, length, download_only
            FROM video_media
            WHERE video_id = ANY($1)
            "#,
        )
        .bind(&ids[..])
        .fetch_all(&self.pool)
        .await?;

        let related_rows = sqlx::query(
            r#"
            SELECT id, video_id, url, description
            FROM related_urls
            WHERE video_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(&ids[..])
        .fetch_all(&self.pool)
        .await?;

        let speaker_rows = sqlx::query(
            r#"
            SELECT vs.video_id, vs.speaker_id
            FROM video_speakers vs
            JOIN speakers s ON s.id = vs.speaker_id
            WHERE vs.video_id = ANY($1)
            ORDER BY lower(s.name), s.id
            "#,
        )
        .bind(&ids[..])
        .fetch_all(&self.pool)
        .await?;

        let mut media: HashMap<VideoId, Vec<MediaUrl>> = HashMap::new();
        for row in &media_rows {
            let (video_id, entry) = Self::map_media(row)?;
            media.entry(video_id).or_default().push(entry);
        }

        let mut related: HashMap<VideoId, Vec<RelatedUrl>> = HashMap::new();
        for row in &related_rows {
            let entry = Self::map_related(row)?;
            related.entry(entry.video_id).or_default().push(entry);
        }

        let mut speakers: HashMap<VideoId, Vec<SpeakerId>> = HashMap::new();
        for row in &speaker_rows {
            let video_id = VideoId(row.try_get("video_id")?);
            let speaker_id = SpeakerId(row.try_get("speaker_id")?);
            speakers.entry(video_id).or_default().push(speaker_id);
        }

        for video in videos.iter_mut() {
            let mut files = media.remove(&video.id).unwrap_or_default();
            files.sort_by_key(|file| file.format);
            video.media = files;
            video.related_urls = related.remove(&video.id).unwrap_or_default();
            video.speaker_ids = speakers.remove(&video.id).unwrap_or_default();
        }

        Ok(())
    }
}

fn foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}

#[async_trait]
impl VideoRepository for PostgresVideoRepository {
    async fn get(&self, id: VideoId) -> Result<Option<Video>> {
        let row = sqlx::query(&format!(
            "SELECT {VIDEO_COLUMNS} FROM videos v WHERE v.id = $1"
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut videos = vec![Self::map_video(&row)?];
        self.attach_children(&mut videos).await?;
        Ok(videos.pop())
    }

    async fn list_live_for_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<VideoSummary>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {VIDEO_COLUMNS}
            FROM videos v
            WHERE v.category_id = $1 AND v.state = 'live'
            {SUMMARY_ORDER}
            "#
        ))
        .bind(category_id.get())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_summary).collect()
    }

    async fn list_live_for_speaker(
        &self,
        speaker_id: SpeakerId,
    ) -> Result<Vec<VideoSummary>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {VIDEO_COLUMNS}
            FROM videos v
            JOIN video_speakers vs ON vs.video_id = v.id
            WHERE vs.speaker_id = $1 AND v.state = 'live'
            {SUMMARY_ORDER}
            "#
        ))
        .bind(speaker_id.get())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_summary).collect()
    }

    async fn list_all(&self) -> Result<Vec<Video>> {
        let rows = sqlx::query(&format!(
            "SELECT {VIDEO_COLUMNS} FROM videos v ORDER BY v.id"
        ))
        .fetch_all(&self.pool)
        .await?;

        let mut videos = rows
            .iter()
            .map(Self::map_video)
            .collect::<Result<Vec<_>>>()?;
        self.attach_children(&mut videos).await?;
        Ok(videos)
    }

    async fn create(&self, video: NewVideo) -> Result<Video> {
        let slug = video.resolved_slug();
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(&format!(
            r#"
            INSERT INTO videos AS v (
                category_id, title, slug, summary, description, state,
                recorded, thumbnail_url, duration_secs, source_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {VIDEO_COLUMNS}
            "#
        ))
        .bind(video.category_id.get())
        .bind(&video.title)
        .bind(slug)
        .bind(&video.summary)
        .bind(&video.description)
        .bind(video.state.as_str())
        .bind(video.recorded)
        .bind(&video.thumbnail_url)
        .bind(video.duration_secs)
        .bind(&video.source_url)
        .fetch_one(&mut *tx)
        .await;

        let row = match inserted {
            Ok(row) => row,
            Err(err) if foreign_key_violation(&err) => {
                return Err(CatalogError::NotFound(format!(
                    "category {}",
                    video.category_id
                )));
            }
            Err(err) => return Err(err.into()),
        };
        let mut created = Self::map_video(&row)?;

        for file in &video.media {
            sqlx::query(
                r#"
                INSERT INTO video_media (video_id, format, url, length, download_only)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(created.id.get())
            .bind(file.format.as_str())
            .bind(&file.url)
            .bind(file.length)
            .bind(file.download_only)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        let mut media = video.media;
        media.sort_by_key(|file| file.format);
        created.media = media;
        Ok(created)
    }

    async fn add_speaker(
        &self,
        video_id: VideoId,
        speaker_id: SpeakerId,
    ) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO video_speakers (video_id, speaker_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(video_id.get())
        .bind(speaker_id.get())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if foreign_key_violation(&err) => Err(
                CatalogError::NotFound(format!(
                    "video {video_id} or speaker {speaker_id}"
                )),
            ),
            Err(err) => Err(err.into()),
        }
    }

    async fn add_related_url(
        &self,
        video_id: VideoId,
        related: NewRelatedUrl,
    ) -> Result<RelatedUrl> {
        let row = sqlx::query(
            r#"
            INSERT INTO related_urls (video_id, url, description)
            VALUES ($1, $2, $3)
            RETURNING id, video_id, url, description
            "#,
        )
        .bind(video_id.get())
        .bind(related.url)
        .bind(related.description)
        .fetch_one(&self.pool)
        .await;

        match row {
            Ok(row) => Self::map_related(&row),
            Err(err) if foreign_key_violation(&err) => {
                Err(CatalogError::NotFound(format!("video {video_id}")))
            }
            Err(err) => Err(err.into()),
        }
    }
}
