// Integration tests for the static file fallback
//
// Non-API requests are served from the configured static root; these tests
// pin the precedence between the API routes and files on disk.

use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use meeting_registry::{create_router, AppState};
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

fn site_root() -> Result<TempDir> {
    let root = TempDir::new()?;
    fs::write(root.path().join("index.html"), "<h1>welcome</h1>")?;
    fs::write(root.path().join("demo.html"), "<h1>demo page</h1>")?;
    fs::write(root.path().join("notes.txt"), "remember the agenda")?;
    Ok(root)
}

fn static_app(root: &TempDir) -> Router {
    create_router(AppState::new("http://localhost:8000", root.path()))
}

async fn send(app: &Router, request: Request<Body>) -> Result<Response> {
    Ok(app.clone().oneshot(request).await?)
}

async fn body_bytes(response: Response) -> Result<Vec<u8>> {
    Ok(to_bytes(response.into_body(), usize::MAX).await?.to_vec())
}

#[tokio::test]
async fn test_serves_file_contents() -> Result<()> {
    let root = site_root()?;
    let app = static_app(&root);

    let response = send(
        &app,
        Request::builder().uri("/notes.txt").body(Body::empty())?,
    )
    .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("text/plain"),
        "expected a text content type, got {}",
        content_type
    );
    assert_eq!(body_bytes(response).await?, b"remember the agenda");

    Ok(())
}

#[tokio::test]
async fn test_serves_index_for_directory_root() -> Result<()> {
    let root = site_root()?;
    let app = static_app(&root);

    let response = send(&app, Request::builder().uri("/").body(Body::empty())?).await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await?, b"<h1>welcome</h1>");

    Ok(())
}

#[tokio::test]
async fn test_missing_file_not_found() -> Result<()> {
    let root = site_root()?;
    let app = static_app(&root);

    let response = send(
        &app,
        Request::builder().uri("/missing.txt").body(Body::empty())?,
    )
    .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_api_prefix_wins_over_files_on_disk() -> Result<()> {
    let root = site_root()?;

    // A file that shadows the create route on disk
    fs::create_dir_all(root.path().join("api/meetings"))?;
    fs::write(root.path().join("api/meetings/create"), "from disk")?;

    let app = static_app(&root);

    // POST still reaches the API handler
    let response = send(
        &app,
        Request::builder()
            .method(Method::POST)
            .uri("/api/meetings/create")
            .body(Body::empty())?,
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await?)?;
    assert_eq!(body["message"], "Meeting created successfully");

    // GET under the API prefix is a registry lookup, never a file read
    let response = send(
        &app,
        Request::builder()
            .uri("/api/meetings/create")
            .body(Body::empty())?,
    )
    .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await?)?;
    assert_eq!(body["error"], "Meeting not found");

    Ok(())
}

#[tokio::test]
async fn test_post_to_static_path_empty_not_found() -> Result<()> {
    let root = site_root()?;
    let app = static_app(&root);

    let response = send(
        &app,
        Request::builder()
            .method(Method::POST)
            .uri("/notes.txt")
            .body(Body::empty())?,
    )
    .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(
        body_bytes(response).await?.is_empty(),
        "files are read-only, POST should fall through to the empty 404"
    );

    Ok(())
}

#[tokio::test]
async fn test_head_omits_body() -> Result<()> {
    let root = site_root()?;
    let app = static_app(&root);

    let response = send(
        &app,
        Request::builder()
            .method(Method::HEAD)
            .uri("/notes.txt")
            .body(Body::empty())?,
    )
    .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_static_responses_carry_cors() -> Result<()> {
    let root = site_root()?;
    let app = static_app(&root);

    let response = send(
        &app,
        Request::builder().uri("/demo.html").body(Body::empty())?,
    )
    .await?;

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*"),
        "file responses should carry the same CORS headers as the API"
    );

    Ok(())
}
