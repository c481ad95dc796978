use super::state::AppState;
use crate::meeting::{join_url, Meeting, DEFAULT_TITLE};
use axum::{
    extract::{Path, Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tracing::{error, info};

/// Prefix shared by every meeting API route
const API_PREFIX: &str = "/api/meetings/";

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CreateMeetingRequest {
    /// Optional meeting title (default: "New Meeting")
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateMeetingResponse {
    pub message: String,
    pub meeting: CreatedMeeting,
}

/// A stored meeting plus the join link advertised to the caller
#[derive(Debug, Serialize)]
pub struct CreatedMeeting {
    #[serde(flatten)]
    pub meeting: Meeting,
    #[serde(rename = "joinUrl")]
    pub join_url: String,
}

#[derive(Debug, Serialize)]
pub struct JoinMeetingResponse {
    pub message: String,
    pub meeting: Meeting,
}

#[derive(Debug, Serialize)]
pub struct GetMeetingResponse {
    pub meeting: Meeting,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/meetings/create
/// Register a new meeting
pub async fn create_meeting(
    State(state): State<AppState>,
    body: Option<Json<CreateMeetingRequest>>,
) -> impl IntoResponse {
    // Bodies are optional; anything unparseable counts as absent
    let title = body
        .and_then(|Json(req)| req.title)
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let meeting = Meeting::new(title);

    info!("Created meeting: {}", meeting.id);

    {
        let mut meetings = state.meetings.write().await;
        meetings.insert(meeting.id.clone(), meeting.clone());
    }

    // Roster starts empty; no route fills it yet
    {
        let mut participants = state.participants.write().await;
        participants.insert(meeting.id.clone(), Vec::new());
    }

    let join_url = join_url(&state.join_base, &meeting.id);

    (
        StatusCode::OK,
        Json(CreateMeetingResponse {
            message: "Meeting created successfully".to_string(),
            meeting: CreatedMeeting { meeting, join_url },
        }),
    )
        .into_response()
}

/// POST /api/meetings/:meeting_id/join
/// Confirm a meeting exists before a client joins; does not alter the roster
pub async fn join_meeting(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
) -> Response {
    join_by_id(&state, &meeting_id).await
}

/// GET /api/meetings/:meeting_id
/// Fetch a stored meeting
pub async fn get_meeting(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
) -> Response {
    get_by_id(&state, &meeting_id).await
}

/// Fallback for everything the routing table does not match.
///
/// Dispatch is positional, mirroring the registry's lenient URL handling:
/// - GET under the API prefix looks up the final path segment as a meeting id
/// - POST under the API prefix ending in `/join` joins the segment before it
/// - any other GET or HEAD is served from the static file root
/// - everything else is an empty 404
pub async fn unmatched(State(state): State<AppState>, req: Request) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    if method == Method::GET {
        if let Some(rest) = path.strip_prefix(API_PREFIX) {
            let meeting_id = trailing_segment(rest);
            get_by_id(&state, meeting_id).await
        } else {
            serve_static(&state, req).await
        }
    } else if method == Method::POST {
        if path.starts_with(API_PREFIX) && path.ends_with("/join") {
            let target = path.strip_suffix("/join").unwrap_or(&path);
            let meeting_id = trailing_segment(target);
            join_by_id(&state, meeting_id).await
        } else {
            StatusCode::NOT_FOUND.into_response()
        }
    } else if method == Method::HEAD {
        serve_static(&state, req).await
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

// ============================================================================
// Lookup Helpers
// ============================================================================

async fn join_by_id(state: &AppState, meeting_id: &str) -> Response {
    let meetings = state.meetings.read().await;

    match meetings.get(meeting_id) {
        Some(meeting) => {
            info!("Joined meeting: {}", meeting_id);
            (
                StatusCode::OK,
                Json(JoinMeetingResponse {
                    message: "Successfully joined meeting".to_string(),
                    meeting: meeting.clone(),
                }),
            )
                .into_response()
        }
        None => meeting_not_found(meeting_id),
    }
}

async fn get_by_id(state: &AppState, meeting_id: &str) -> Response {
    let meetings = state.meetings.read().await;

    match meetings.get(meeting_id) {
        Some(meeting) => (
            StatusCode::OK,
            Json(GetMeetingResponse {
                meeting: meeting.clone(),
            }),
        )
            .into_response(),
        None => meeting_not_found(meeting_id),
    }
}

fn meeting_not_found(meeting_id: &str) -> Response {
    error!("Meeting {} not found", meeting_id);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Meeting not found".to_string(),
        }),
    )
        .into_response()
}

async fn serve_static(state: &AppState, req: Request) -> Response {
    match ServeDir::new(&state.static_root).oneshot(req).await {
        Ok(response) => response.into_response(),
        Err(infallible) => match infallible {},
    }
}

fn trailing_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}
