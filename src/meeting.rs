use rand::Rng;
use serde::{Deserialize, Serialize};

/// Alphabet meeting ids are sampled from: lowercase letters and digits.
pub const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of a generated meeting id.
pub const ID_LENGTH: usize = 12;

/// Title applied when a create request does not supply one.
pub const DEFAULT_TITLE: &str = "New Meeting";

/// Creation timestamp stamped onto every meeting. The registry does not
/// track real time; clients depend on this exact literal.
pub const CREATED_AT: &str = "2024-01-01T00:00:00Z";

/// Status every meeting carries; there is no transition out of it.
pub const STATUS_ACTIVE: &str = "active";

/// A meeting record held in the in-memory registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Unique 12-character lowercase-alphanumeric identifier
    pub id: String,

    /// Display title
    pub title: String,

    /// Fixed placeholder timestamp, identical for every meeting
    pub created_at: String,

    /// Always "active"
    pub status: String,
}

impl Meeting {
    /// Create a meeting with a freshly sampled id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            created_at: CREATED_AT.to_string(),
            status: STATUS_ACTIVE.to_string(),
        }
    }
}

/// An entry in a meeting's participant roster.
///
/// Rosters are created empty alongside each meeting and no API route fills
/// them; the shape is kept so the registry matches the room-presence model
/// it was carved out of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name
    pub name: String,
}

/// Sample a meeting id: `ID_LENGTH` characters drawn uniformly from
/// `ID_ALPHABET`. Uniqueness is not checked against the registry; the
/// 36^12 space makes collisions unreachable in practice.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Build the join link advertised in create responses
pub fn join_url(base: &str, meeting_id: &str) -> String {
    format!("{}/demo.html?meeting={}", base, meeting_id)
}
