use async_trait::async_trait;
use videx_model::{Category, CategoryId, CategoryListing, NewCategory};

use crate::error::Result;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category ordered by title, with its count of live videos.
    async fn list(&self) -> Result<Vec<CategoryListing>>;

    async fn get(&self, id: CategoryId) -> Result<Option<Category>>;

    async fn create(&self, category: NewCategory) -> Result<Category>;
}
