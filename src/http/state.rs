use crate::meeting::{Meeting, Participant};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Registered meetings (meeting_id → meeting)
    pub meetings: Arc<RwLock<HashMap<String, Meeting>>>,

    /// Participant rosters (meeting_id → participants). Rosters are created
    /// empty and no route currently adds to them.
    pub participants: Arc<RwLock<HashMap<String, Vec<Participant>>>>,

    /// Base URL interpolated into join links
    pub join_base: String,

    /// Directory served for non-API requests
    pub static_root: PathBuf,
}

impl AppState {
    pub fn new(join_base: impl Into<String>, static_root: impl Into<PathBuf>) -> Self {
        Self {
            meetings: Arc::new(RwLock::new(HashMap::new())),
            participants: Arc::new(RwLock::new(HashMap::new())),
            join_base: join_base.into(),
            static_root: static_root.into(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("http://localhost:8000", ".")
    }
}
