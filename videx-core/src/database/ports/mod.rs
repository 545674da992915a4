//! Repository ports (interfaces) for the catalog.
//! Handlers and services depend on these traits; implementations live in
//! `database::infrastructure` (Postgres and in-memory).

pub mod categories;
pub mod speakers;
pub mod videos;
