//! Core data model definitions shared across Videx crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod category;
pub mod error;
pub mod ids;
pub mod slug;
pub mod speaker;
pub mod video;

pub use category::{Category, CategoryListing, NewCategory};
pub use error::{ModelError, Result as ModelResult};
pub use ids::{CategoryId, RelatedUrlId, SpeakerId, VideoId};
pub use slug::slugify;
pub use speaker::{NewSpeaker, Speaker};
pub use video::{
    MediaFormat, MediaUrl, NewRelatedUrl, NewVideo, RelatedUrl, Video,
    VideoState, VideoSummary,
};
