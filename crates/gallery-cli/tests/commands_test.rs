//! Commands wired end-to-end against a local mock server.

use std::path::{Path, PathBuf};

use gallery_app::UseCases;
use gallery_cli::bootstrap::wire_dependencies;
use gallery_cli::cli::UploadArgs;
use gallery_cli::commands::{list_images, upload_image, PageLimit};
use gallery_core::config::AppConfig;
use gallery_core::ports::QueryCachePort;
use gallery_core::{ListingStatus, QueryKey};
use mockito::Matcher;
use serde_json::json;

const FIRST_PAGE: &str = r#"{
    "data": [
        {"id": "1", "title": "Doge", "description": "The best doge", "url": "https://i.ibb.co/doge.jpg", "ts": 1},
        {"id": "2", "title": "Hotdog", "description": "Hot dog", "url": "https://i.ibb.co/hotdog.png", "ts": 2}
    ],
    "after": "c1"
}"#;

const LAST_PAGE: &str = r#"{
    "data": [
        {"id": "3", "title": "Cat", "description": "Cat", "url": "https://i.ibb.co/cat.gif", "ts": 3}
    ],
    "after": null
}"#;

fn config_for(server: &mockito::ServerGuard, data_dir: &Path) -> AppConfig {
    let mut config = AppConfig::with_defaults(data_dir.to_path_buf());
    config.api_base_url = format!("{}/api/", server.url());
    config.image_host_upload_url = format!("{}/1/upload", server.url());
    config.image_host_api_key = "test-key".to_string();
    config
}

fn write_png(dir: &Path) -> PathBuf {
    let path = dir.join("pic.png");
    std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();
    path
}

#[tokio::test]
async fn list_follows_cursor_up_to_page_limit() {
    let mut server = mockito::Server::new_async().await;
    let first = server
        .mock("GET", "/api/images")
        .match_query(Matcher::Any)
        .with_header("content-type", "application/json")
        .with_body(FIRST_PAGE)
        .expect(1)
        .create_async()
        .await;
    let last = server
        .mock("GET", "/api/images")
        .match_query(Matcher::UrlEncoded("after".into(), "c1".into()))
        .with_header("content-type", "application/json")
        .with_body(LAST_PAGE)
        .expect(1)
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();
    let deps = wire_dependencies(&config_for(&server, dir.path())).unwrap();

    let snapshot = list_images(&UseCases::new(&deps), PageLimit::All)
        .await
        .unwrap();

    let titles: Vec<_> = snapshot.images.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Doge", "Hotdog", "Cat"]);
    assert_eq!(snapshot.status, ListingStatus::Ready);
    assert!(!snapshot.has_next_page);
    first.assert_async().await;
    last.assert_async().await;
}

#[tokio::test]
async fn list_first_page_failure_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/images")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();
    let deps = wire_dependencies(&config_for(&server, dir.path())).unwrap();

    let err = list_images(&UseCases::new(&deps), PageLimit::Pages(1))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Failed to load images"));
}

#[tokio::test]
async fn upload_hosts_file_then_registers_it() {
    let mut server = mockito::Server::new_async().await;
    let host = server
        .mock("POST", "/1/upload")
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"url": "https://i.ibb.co/xyz/pic.png"}}"#)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/api/images")
        .match_body(Matcher::Json(json!({
            "url": "https://i.ibb.co/xyz/pic.png",
            "title": "My Pic",
            "description": "desc"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"user": {}}"#)
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();
    let deps = wire_dependencies(&config_for(&server, dir.path())).unwrap();
    let args = UploadArgs {
        path: write_png(dir.path()),
        title: "My Pic".to_string(),
        description: "desc".to_string(),
    };

    let image = upload_image(&UseCases::new(&deps), &args).await.unwrap();

    assert_eq!(image.url, "https://i.ibb.co/xyz/pic.png");
    host.assert_async().await;
    create.assert_async().await;
    assert_eq!(
        deps.query_cache.generation(&QueryKey::images()),
        1
    );
}

#[tokio::test]
async fn upload_with_invalid_title_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let host = server
        .mock("POST", "/1/upload")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();
    let deps = wire_dependencies(&config_for(&server, dir.path())).unwrap();
    let args = UploadArgs {
        path: write_png(dir.path()),
        title: "x".to_string(),
        description: "desc".to_string(),
    };

    let err = upload_image(&UseCases::new(&deps), &args).await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid upload: Title: Minimum of 2 characters");
    host.assert_async().await;
}

#[tokio::test]
async fn upload_registration_failure_is_reported() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/1/upload")
        .match_query(Matcher::Any)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"url": "https://i.ibb.co/xyz/pic.png"}}"#)
        .create_async()
        .await;
    server
        .mock("POST", "/api/images")
        .with_status(400)
        .with_body("bad request")
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();
    let deps = wire_dependencies(&config_for(&server, dir.path())).unwrap();
    let args = UploadArgs {
        path: write_png(dir.path()),
        title: "My Pic".to_string(),
        description: "desc".to_string(),
    };

    let err = upload_image(&UseCases::new(&deps), &args).await.unwrap_err();

    assert!(err.to_string().contains("Failed to register the image"));
    assert_eq!(
        deps.query_cache.generation(&QueryKey::images()),
        0
    );
}
