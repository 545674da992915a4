//! Full-text search over the video catalog.
//!
//! The index is a tantivy index on disk with titles and the remaining text
//! in separate fields.
//! Every video is indexed regardless of its publication state; callers that
//! render results decide what to show.

pub mod document;
pub mod index;
pub mod indexer;
pub mod tantivy_index;
pub mod tokenizer;

pub use document::SearchDocument;
pub use index::{SearchHit, SearchIndex, SearchPage};
pub use indexer::{build_documents, rebuild_index, reindex_video};
pub use tantivy_index::TantivySearchIndex;
pub use tokenizer::tokenize;
