//! Listing rules shared by every storage backend.

pub mod listing;
pub mod speaker_filter;

pub use listing::{compare_listing, sort_listing};
pub use speaker_filter::{SpeakerIndex, load_speaker_index, resolve_initial};
