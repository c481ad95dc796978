pub mod config;
pub mod http;
pub mod meeting;

pub use config::Config;
pub use http::{create_router, AppState};
pub use meeting::{Meeting, Participant};
