use super::handlers;
use super::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
///
/// Method mismatches on the API routes fall through to the shared fallback
/// instead of axum's default 405, so a wrong-method request behaves like any
/// other unmatched one.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Meeting registry
        .route(
            "/api/meetings/create",
            post(handlers::create_meeting).fallback(handlers::unmatched),
        )
        .route(
            "/api/meetings/:meeting_id/join",
            post(handlers::join_meeting).fallback(handlers::unmatched),
        )
        .route(
            "/api/meetings/:meeting_id",
            get(handlers::get_meeting).fallback(handlers::unmatched),
        )
        // Positional dispatch and static files for everything else
        .fallback(handlers::unmatched)
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        // Answer preflights from any origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        // Browser clients expect these exact header values on every response,
        // preflight or not
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(state)
}
