use serde::{Deserialize, Serialize};
use videx_model::{Category, Speaker, Video, VideoSummary};

/// Standard envelope for successful JSON API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data: Some(data),
        }
    }
}

/// A category with its publicly listed videos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub category: Category,
    pub videos: Vec<VideoSummary>,
}

/// A video with the category and speakers it references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoDetail {
    pub video: Video,
    pub category: Option<Category>,
    pub speakers: Vec<Speaker>,
}
