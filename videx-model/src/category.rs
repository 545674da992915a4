use chrono::NaiveDate;

use crate::ids::CategoryId;
use crate::slug::slugify;

/// A grouping of videos, typically a conference or an event series.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub url: Option<String>,
    pub start_date: Option<NaiveDate>,
}

impl Category {
    /// Canonical detail URL; the slug segment is cosmetic.
    pub fn absolute_url(&self) -> String {
        format!("/category/{}/{}/", self.id, self.slug)
    }
}

/// A category together with the number of publicly listed videos it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryListing {
    pub category: Category,
    pub live_videos: i64,
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, Default)]
pub struct NewCategory {
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    pub url: Option<String>,
    pub start_date: Option<NaiveDate>,
}

impl NewCategory {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Slug to persist: the explicit one when provided, otherwise derived
    /// from the title.
    pub fn resolved_slug(&self) -> String {
        match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slugify(slug),
            _ => slugify(&self.title),
        }
    }
}
