use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use videx_model::{NewSpeaker, Speaker, SpeakerId, VideoId};

use crate::database::ports::speakers::SpeakerRepository;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct PostgresSpeakerRepository {
    pool: PgPool,
}

impl PostgresSpeakerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_row(row: &PgRow) -> Result<Speaker> {
        Ok(Speaker {
            id: SpeakerId(row.try_get("id")?),
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
        })
    }

    fn map_rows(rows: &[PgRow]) -> Result<Vec<Speaker>> {
        rows.iter().map(Self::map_row).collect()
    }
}

#[async_trait]
impl SpeakerRepository for PostgresSpeakerRepository {
    async fn initials(&self) -> Result<Vec<String>> {
        let initials: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT upper(left(ltrim(name), 1)) AS initial
            FROM speakers
            WHERE ltrim(name) <> ''
            ORDER BY initial
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(initials)
    }

    async fn list_by_initial(&self, initial: &str) -> Result<Vec<Speaker>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, slug
            FROM speakers
            WHERE upper(left(ltrim(name), 1)) = upper($1)
            ORDER BY lower(name), id
            "#,
        )
        .bind(initial)
        .fetch_all(&self.pool)
        .await?;

        Self::map_rows(&rows)
    }

    async fn list(&self) -> Result<Vec<Speaker>> {
        let rows = sqlx::query(
            "SELECT id, name, slug FROM speakers ORDER BY lower(name), id",
        )
        .fetch_all(&self.pool)
        .await?;

        Self::map_rows(&rows)
    }

    async fn get(&self, id: SpeakerId) -> Result<Option<Speaker>> {
        let row = sqlx::query("SELECT id, name, slug FROM speakers WHERE id = $1")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn list_for_video(&self, video_id: VideoId) -> Result<Vec<Speaker>> {
        let rows = sqlx::query(
            r#"
            SELECT s.id, s.name, s.slug
            FROM speakers s
            JOIN video_speakers vs ON vs.speaker_id = s.id
            WHERE vs.video_id = $1
            ORDER BY lower(s.name), s.id
            "#,
        )
        .bind(video_id.get())
        .fetch_all(&self.pool)
        .await?;

        Self::map_rows(&rows)
    }

    async fn create(&self, speaker: NewSpeaker) -> Result<Speaker> {
        let slug = speaker.resolved_slug();
        let row = sqlx::query(
            r#"
            INSERT INTO speakers (name, slug)
            VALUES ($1, $2)
            RETURNING id, name, slug
            "#,
        )
        .bind(speaker.name)
        .bind(slug)
        .fetch_one(&self.pool)
        .await?;

        Self::map_row(&row)
    }
}
