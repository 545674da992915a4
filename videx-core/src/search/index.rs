use serde::Serialize;
use videx_model::VideoId;

use super::document::SearchDocument;
use crate::error::Result;

/// Operations every search backend supports.
pub trait SearchIndex: Send + Sync {
    /// Replace the whole index with `documents`.
    fn rebuild(&self, documents: Vec<SearchDocument>) -> Result<()>;

    /// Insert or replace a single document.
    fn upsert(&self, document: SearchDocument) -> Result<()>;

    fn remove(&self, video_id: VideoId) -> Result<()>;

    /// Full-text search. `page` is one-based.
    fn search(&self, query: &str, page: usize, per_page: usize) -> Result<SearchPage>;

    /// Titles of videos whose title words start with every query word.
    fn suggest(&self, query: &str, limit: usize) -> Result<Vec<String>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub document: SearchDocument,
    pub score: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    pub query: String,
    pub hits: Vec<SearchHit>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

impl SearchPage {
    pub fn empty(query: &str, page: usize, per_page: usize) -> Self {
        Self {
            query: query.to_string(),
            hits: Vec::new(),
            total: 0,
            page: page.max(1),
            per_page,
        }
    }

    pub fn page_count(&self) -> usize {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }

    pub fn previous_page(&self) -> Option<usize> {
        (self.page > 1 && self.total > 0).then(|| self.page - 1)
    }

    pub fn next_page(&self) -> Option<usize> {
        (self.page < self.page_count()).then(|| self.page + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total: usize, page: usize, per_page: usize) -> SearchPage {
        SearchPage {
            total,
            ..SearchPage::empty("talk", page, per_page)
        }
    }

    #[test]
    fn page_links_follow_total() {
        let first = page(4, 1, 3);
        assert_eq!(first.page_count(), 2);
        assert_eq!(first.previous_page(), None);
        assert_eq!(first.next_page(), Some(2));

        let second = page(4, 2, 3);
        assert_eq!(second.previous_page(), Some(1));
        assert_eq!(second.next_page(), None);
    }

    #[test]
    fn empty_page_has_no_links() {
        let empty = SearchPage::empty("", 0, 20);
        assert_eq!(empty.page, 1);
        assert_eq!(empty.page_count(), 0);
        assert_eq!(empty.previous_page(), None);
        assert_eq!(empty.next_page(), None);
        assert_eq!(page(10, 1, 0).page_count(), 0);
    }
}
