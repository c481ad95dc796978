//! HTTP surface of the meeting registry
//!
//! This module provides the JSON API plus the static file fallback:
//! - POST /api/meetings/create - Register a new meeting
//! - POST /api/meetings/:id/join - Confirm a meeting before joining
//! - GET /api/meetings/:id - Fetch a stored meeting
//! - GET anything else - Static files from the configured root

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
