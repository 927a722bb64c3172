//! Security tests for amyarc-ar
//!
//! The archive folder is the trust boundary: no request may read a file
//! outside it. Traversal names must be rejected as invalid (400), never
//! resolved and never reported as mere absence.

use amyarc_ar::{build_router, AppState};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Test helper: archive folder with one real clip and a sibling secret
/// outside the archive
fn setup_archive_with_outside_secret() -> (TempDir, TempDir) {
    let outside = TempDir::new().unwrap();
    std::fs::write(outside.path().join("secret.txt"), "top secret").unwrap();

    let archive = TempDir::new().unwrap();
    std::fs::write(archive.path().join("seg_0.mp3"), b"audio").unwrap();
    (archive, outside)
}

fn setup_app(archive: &TempDir) -> axum::Router {
    build_router(AppState::new(archive.path()))
}

fn test_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// =============================================================================
// Path Traversal Tests
// =============================================================================

/// Encoded traversal segments arrive as a single path parameter and must
/// be rejected by the resolver with 400.
#[tokio::test]
async fn test_audio_rejects_encoded_traversal() {
    let (archive, _outside) = setup_archive_with_outside_secret();

    for uri in [
        "/api/audio/..%2F..%2Fetc%2Fpasswd",
        "/api/audio/%2E%2E%2Fsecret.txt",
        "/api/audio/..%5C..%5Csecret.txt",
        "/api/audio/%2Fetc%2Fpasswd",
    ] {
        let app = setup_app(&archive);
        let response = app.oneshot(test_request(uri)).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "{} should be rejected as an invalid name",
            uri
        );
    }
}

/// Literal `../` segments never reach the handler as one parameter; the
/// router has no matching route. Either way nothing outside the archive
/// is served.
#[tokio::test]
async fn test_audio_literal_traversal_never_succeeds() {
    let (archive, _outside) = setup_archive_with_outside_secret();
    let app = setup_app(&archive);

    let response = app
        .oneshot(test_request("/api/audio/../../etc/passwd"))
        .await
        .unwrap();

    assert!(
        response.status() == StatusCode::NOT_FOUND
            || response.status() == StatusCode::BAD_REQUEST,
        "Expected 404/400 for literal traversal, got {}",
        response.status()
    );
}

#[tokio::test]
async fn test_analysis_id_rejects_encoded_traversal() {
    let (archive, _outside) = setup_archive_with_outside_secret();

    for uri in [
        "/api/analysis/..%2F..%2Fescape",
        "/api/analysis/%2E%2E",
        "/api/analysis/ids%2Fnested",
    ] {
        let app = setup_app(&archive);
        let response = app.oneshot(test_request(uri)).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "{} should be rejected as an invalid name",
            uri
        );
    }
}

/// Invalid names are a malformed-input signal, distinct from absence
#[tokio::test]
async fn test_invalid_name_is_distinct_from_not_found() {
    let (archive, _outside) = setup_archive_with_outside_secret();

    let invalid = setup_app(&archive)
        .oneshot(test_request("/api/audio/..%2Fsecret.txt"))
        .await
        .unwrap();
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

    let absent = setup_app(&archive)
        .oneshot(test_request("/api/audio/absent.mp3"))
        .await
        .unwrap();
    assert_eq!(absent.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Symlink Escape Tests
// =============================================================================

/// A clip name that is itself plain but resolves through a symlink to a
/// file outside the archive must be rejected.
#[cfg(unix)]
#[tokio::test]
async fn test_audio_rejects_symlink_escape() {
    let (archive, outside) = setup_archive_with_outside_secret();
    std::os::unix::fs::symlink(
        outside.path().join("secret.txt"),
        archive.path().join("escape.mp3"),
    )
    .unwrap();

    let app = setup_app(&archive);
    let response = app
        .oneshot(test_request("/api/audio/escape.mp3"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Symlinks that stay inside the archive keep working
#[cfg(unix)]
#[tokio::test]
async fn test_audio_serves_symlink_inside_archive() {
    let (archive, _outside) = setup_archive_with_outside_secret();
    std::os::unix::fs::symlink(
        archive.path().join("seg_0.mp3"),
        archive.path().join("alias.mp3"),
    )
    .unwrap();

    let app = setup_app(&archive);
    let response = app
        .oneshot(test_request("/api/audio/alias.mp3"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
