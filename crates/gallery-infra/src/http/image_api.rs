//! Gallery REST API client.

use anyhow::Context;
use async_trait::async_trait;
use gallery_core::ports::{ImageApiError, ImageApiPort};
use gallery_core::{Cursor, ImagePage, NewImage};
use reqwest::{Client, Response, Url};
use tracing::{debug, warn};

use super::with_trailing_slash;

/// Collection path below the API base URL.
const IMAGES_PATH: &str = "images";

/// [`ImageApiPort`] over HTTP.
///
/// - `POST {base}/images` with a JSON `{url, title, description}` body
/// - `GET {base}/images?after={cursor}`, `after` omitted on the first page
pub struct ReqwestImageApi {
    client: Client,
    images_url: Url,
}

impl ReqwestImageApi {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> anyhow::Result<Self> {
        let base = Url::parse(&with_trailing_slash(base_url))
            .with_context(|| format!("Invalid API base URL: {base_url}"))?;
        let images_url = base
            .join(IMAGES_PATH)
            .context("Failed to build images endpoint URL")?;
        Ok(Self { client, images_url })
    }

    pub fn images_url(&self) -> &Url {
        &self.images_url
    }

    async fn ensure_success(response: Response) -> Result<Response, ImageApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "Gallery API returned an error status");
        Err(ImageApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl ImageApiPort for ReqwestImageApi {
    #[tracing::instrument(name = "infra.image_api.create_image", skip_all, fields(title = %image.title))]
    async fn create_image(&self, image: &NewImage) -> Result<(), ImageApiError> {
        let response = self
            .client
            .post(self.images_url.clone())
            .json(image)
            .send()
            .await
            .map_err(|e| ImageApiError::Transport(e.to_string()))?;

        let response = Self::ensure_success(response).await?;
        debug!(status = response.status().as_u16(), "Image record created");
        Ok(())
    }

    #[tracing::instrument(
        name = "infra.image_api.fetch_page",
        skip_all,
        fields(after = after.map(Cursor::as_str))
    )]
    async fn fetch_page(&self, after: Option<&Cursor>) -> Result<ImagePage, ImageApiError> {
        let mut request = self.client.get(self.images_url.clone());
        if let Some(cursor) = after {
            request = request.query(&[("after", cursor.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ImageApiError::Transport(e.to_string()))?;
        let response = Self::ensure_success(response).await?;

        let page: ImagePage = response
            .json()
            .await
            .map_err(|e| ImageApiError::Decode(e.to_string()))?;

        debug!(
            images = page.len(),
            has_next = page.next_cursor().is_some(),
            "Fetched image page"
        );
        Ok(page)
    }
}
