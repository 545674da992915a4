//! Route definitions and JSON payloads shared between the server and its
//! tests.

pub mod responses;
pub mod routes;

pub use responses::{ApiResponse, CategoryDetail, VideoDetail};
