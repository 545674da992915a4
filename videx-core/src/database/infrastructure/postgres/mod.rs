//! Postgres adapters for the catalog ports. Queries are checked at runtime so
//! the crate builds without a live database.

pub mod categories;
pub mod speakers;
pub mod videos;

pub use categories::PostgresCategoryRepository;
pub use speakers::PostgresSpeakerRepository;
pub use videos::PostgresVideoRepository;
