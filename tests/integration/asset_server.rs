//! Integration tests for the HTTP surface over the asset directory

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pippin::server::router;
use pippin::store::AssetStore;
use tempfile::TempDir;
use tower::ServiceExt;

const CHESS_SVG: &[u8] = b"<svg xmlns=\"http://www.w3.org/2000/svg\"><rect width=\"8\" height=\"8\"/></svg>";

fn app_with_assets(temp: &TempDir) -> Router {
    let store = AssetStore::open(temp.path()).unwrap();
    std::fs::write(temp.path().join("pippin_playing_chess.svg"), CHESS_SVG).unwrap();
    std::fs::write(temp.path().join("pippin_surfing_the_waves.svg"), "<svg/>").unwrap();
    std::fs::write(temp.path().join("README.txt"), "not an asset").unwrap();
    router(store)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, body.to_vec())
}

#[tokio::test]
async fn test_fetch_returns_exact_bytes() {
    let temp = TempDir::new().unwrap();
    let app = app_with_assets(&temp);

    let (status, content_type, body) = get(&app, "/svgs/pippin_playing_chess.svg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
    assert_eq!(body, CHESS_SVG);
}

#[tokio::test]
async fn test_fetch_missing_is_404() {
    let temp = TempDir::new().unwrap();
    let app = app_with_assets(&temp);

    let (status, _, body) = get(&app, "/svgs/pippin_flying_a_kite.svg").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, b"SVG file not found.");
}

#[tokio::test]
async fn test_fetch_cannot_escape_directory() {
    let temp = TempDir::new().unwrap();
    let assets = temp.path().join("svgs");
    std::fs::create_dir(&assets).unwrap();
    std::fs::write(temp.path().join("secret.svg"), "<svg>secret</svg>").unwrap();
    let app = router(AssetStore::open(&assets).unwrap());

    let (status, _, _) = get(&app, "/svgs/..%2Fsecret.svg").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_index_lists_only_svgs() {
    let temp = TempDir::new().unwrap();
    let app = app_with_assets(&temp);

    let (status, content_type, body) = get(&app, "/").await;
    let html = String::from_utf8(body).unwrap();
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(html.contains("/svgs/pippin_playing_chess.svg"));
    assert!(html.contains("/svgs/pippin_surfing_the_waves.svg"));
    assert!(!html.contains("README.txt"));
}

#[tokio::test]
async fn test_json_listing_is_sorted() {
    let temp = TempDir::new().unwrap();
    let app = app_with_assets(&temp);

    let (status, _, body) = get(&app, "/api/svgs").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<String> = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        names,
        vec!["pippin_playing_chess.svg", "pippin_surfing_the_waves.svg"]
    );
}

#[tokio::test]
async fn test_unreadable_directory_is_500() {
    let temp = TempDir::new().unwrap();
    let app = router(AssetStore::at(temp.path().join("never-created")));

    let (status, _, _) = get(&app, "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _, _) = get(&app, "/api/svgs").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_newly_written_assets_are_visible() {
    let temp = TempDir::new().unwrap();
    let store = AssetStore::open(temp.path()).unwrap();
    let app = router(store.clone());

    let (_, _, body) = get(&app, "/api/svgs").await;
    assert_eq!(body, b"[]");

    store.write("pippin_doing_a_handstand.svg", "<svg/>").unwrap();
    let (status, _, body) = get(&app, "/svgs/pippin_doing_a_handstand.svg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<svg/>");
}
