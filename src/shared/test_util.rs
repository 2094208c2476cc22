use crate::model::app_state::AppState;
use crate::model::envelope::ResponseEnvelope;
use axum::body::Body;
use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use std::path::Path;
use tower::ServiceExt;

pub const BOUNDARY: &str = "courier-test-boundary";

pub const TEST_BODY_LIMIT: usize = 1024 * 1024;

pub fn app_with_roots(uploads_dir: &Path, saved_dir: &Path) -> Router {
    crate::build_router(AppState::new(
        uploads_dir.to_path_buf(),
        saved_dir.to_path_buf(),
        TEST_BODY_LIMIT,
    ))
}

/// Shared root with request bodies capped at `max_body_size` bytes.
pub fn app_with_limit(root: &Path, max_body_size: usize) -> Router {
    crate::build_router(AppState::new(
        root.to_path_buf(),
        root.to_path_buf(),
        max_body_size,
    ))
}

/// Uploads and downloads share `root`.
pub fn app_with_shared_root(root: &Path) -> Router {
    app_with_roots(root, root)
}

pub fn file_part(name: &str, filename: &str, content: &[u8]) -> Vec<u8> {
    let mut part = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
    )
    .into_bytes();
    part.extend_from_slice(content);
    part.extend_from_slice(b"\r\n");
    part
}

pub fn text_part(name: &str, value: &str) -> Vec<u8> {
    format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
        .into_bytes()
}

pub fn multipart_request(uri: &str, parts: Vec<Vec<u8>>) -> Request<Body> {
    let mut body = parts.concat();
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn urlencoded_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn bare_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*",
        "every response must allow any origin"
    );
    response
}

pub async fn read_envelope(response: Response) -> (StatusCode, ResponseEnvelope) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

pub async fn read_body(response: Response) -> (StatusCode, Vec<u8>) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}
