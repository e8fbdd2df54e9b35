//! HTTP adapter tests against a local mock server.

use gallery_core::ports::{ImageApiError, ImageApiPort};
use gallery_core::{Cursor, NewImage};
use gallery_infra::ReqwestImageApi;
use mockito::Matcher;
use serde_json::json;

const PAGE_BODY: &str = r#"{
    "data": [
        {
            "title": "Doge",
            "description": "The best doge",
            "url": "https://i.ibb.co/K6DZdXc/doge.jpg",
            "ts": 1620222828340000,
            "id": "294961059684418048"
        },
        {
            "title": "Cachorrinho",
            "description": "Hot dog",
            "url": "https://i.ibb.co/XkXwNFS/hotdog.png",
            "ts": 1620222830210000,
            "id": "294961061602623997"
        }
    ],
    "after": "294961061602623999"
}"#;

fn api_for(server: &mockito::ServerGuard) -> ReqwestImageApi {
    ReqwestImageApi::new(&format!("{}/api/", server.url())).unwrap()
}

#[tokio::test]
async fn test_first_page_omits_after_parameter() {
    let mut server = mockito::Server::new_async().await;
    let with_after = server
        .mock("GET", "/api/images")
        .match_query(Matcher::Regex("after=".into()))
        .expect(0)
        .create_async()
        .await;
    let first_page = server
        .mock("GET", "/api/images")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PAGE_BODY)
        .create_async()
        .await;

    let page = api_for(&server).fetch_page(None).await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.data[0].title, "Doge");
    assert_eq!(page.next_cursor().map(Cursor::as_str), Some("294961061602623999"));
    first_page.assert_async().await;
    with_after.assert_async().await;
}

#[tokio::test]
async fn test_next_page_sends_cursor_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/images")
        .match_query(Matcher::UrlEncoded("after".into(), "cursor123".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": [], "after": null}"#)
        .create_async()
        .await;

    let cursor = Cursor::from("cursor123");
    let page = api_for(&server).fetch_page(Some(&cursor)).await.unwrap();

    assert!(page.is_empty());
    assert!(page.next_cursor().is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_maps_to_status_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/images")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let err = api_for(&server).fetch_page(None).await.unwrap_err();

    assert_eq!(
        err,
        ImageApiError::Status {
            status: 500,
            body: "boom".to_string()
        }
    );
}

#[tokio::test]
async fn test_malformed_body_maps_to_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/images")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = api_for(&server).fetch_page(None).await.unwrap_err();

    assert!(matches!(err, ImageApiError::Decode(_)));
}

#[tokio::test]
async fn test_create_image_posts_json_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/images")
        .match_body(Matcher::Json(json!({
            "url": "https://i.ibb.co/abc/pic.png",
            "title": "My Pic",
            "description": "desc"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"user": {"ref": "1"}}"#)
        .create_async()
        .await;

    let image = NewImage {
        url: "https://i.ibb.co/abc/pic.png".to_string(),
        title: "My Pic".to_string(),
        description: "desc".to_string(),
    };
    api_for(&server).create_image(&image).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_image_rejection_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/images")
        .with_status(400)
        .with_body(r#"{"error": "invalid"}"#)
        .create_async()
        .await;

    let image = NewImage {
        url: "u".to_string(),
        title: "t".to_string(),
        description: "d".to_string(),
    };
    let err = api_for(&server).create_image(&image).await.unwrap_err();

    assert!(matches!(err, ImageApiError::Status { status: 400, .. }));
}

#[tokio::test]
async fn test_unreachable_server_maps_to_transport_error() {
    // Port 9 (discard) is not served in test environments.
    let api = ReqwestImageApi::new("http://127.0.0.1:9/api/").unwrap();

    let err = api.fetch_page(None).await.unwrap_err();

    assert!(matches!(err, ImageApiError::Transport(_)));
}
