use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use videx_model::{Category, CategoryId, CategoryListing, NewCategory};

use crate::database::ports::categories::CategoryRepository;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_row(row: &PgRow) -> Result<Category> {
        Ok(Category {
            id: CategoryId(row.try_get("id")?),
            title: row.try_get("title")?,
            slug: row.try_get("slug")?,
            description: row.try_get("description")?,
            url: row.try_get("url")?,
            start_date: row.try_get("start_date")?,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list(&self) -> Result<Vec<CategoryListing>> {
        let rows = sqlx::query(
            r#"
            SELECT
                c.id, c.title, c.slug, c.description, c.url, c.start_date,
                COUNT(v.id) FILTER (WHERE v.state = 'live') AS live_videos
            FROM categories c
            LEFT JOIN videos v ON v.category_id = c.id
            GROUP BY c.id
            ORDER BY lower(c.title), c.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(CategoryListing {
                    category: Self::map_row(row)?,
                    live_videos: row.try_get("live_videos")?,
                })
            })
            .collect()
    }

    async fn get(&self, id: CategoryId) -> Result<Option<Category>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, slug, description, url, start_date
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn create(&self, category: NewCategory) -> Result<Category> {
        let slug = category.resolved_slug();
        let row = sqlx::query(
            r#"
            INSERT INTO categories (title, slug, description, url, start_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, slug, description, url, start_date
            "#,
        )
        .bind(category.title)
        .bind(slug)
        .bind(category.description)
        .bind(category.url)
        .bind(category.start_date)
        .fetch_one(&self.pool)
        .await?;

        Self::map_row(&row)
    }
}
