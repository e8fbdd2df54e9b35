//! Image host adapter tests against a local mock server.

use gallery_core::ports::{ImageHostError, ImageHostPort};
use gallery_core::ImageFile;
use gallery_infra::ImgbbImageHost;
use mockito::Matcher;

fn png() -> ImageFile {
    ImageFile::new("pic.png", "image/png", vec![0x89, b'P', b'N', b'G'])
}

fn host_for(server: &mockito::ServerGuard) -> ImgbbImageHost {
    ImgbbImageHost::new(&format!("{}/1/upload", server.url()), "test-key").unwrap()
}

#[tokio::test]
async fn test_upload_returns_hosted_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/1/upload")
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data".into()),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"url": "https://i.ibb.co/xyz/pic.png"}, "success": true}"#)
        .create_async()
        .await;

    let url = host_for(&server).upload(&png()).await.unwrap();

    assert_eq!(url, "https://i.ibb.co/xyz/pic.png");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_upload_without_url_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/1/upload")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"data": {}, "success": true}"#)
        .create_async()
        .await;

    let err = host_for(&server).upload(&png()).await.unwrap_err();

    assert_eq!(err, ImageHostError::MissingUrl);
}

#[tokio::test]
async fn test_rejected_upload_reports_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/1/upload")
        .match_query(Matcher::Any)
        .with_status(400)
        .create_async()
        .await;

    let err = host_for(&server).upload(&png()).await.unwrap_err();

    assert_eq!(err, ImageHostError::Rejected { status: 400 });
}
