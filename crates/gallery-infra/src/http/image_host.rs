//! imgbb-compatible image host client.

use anyhow::Context;
use async_trait::async_trait;
use gallery_core::ports::{ImageHostError, ImageHostPort};
use gallery_core::ImageFile;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

/// Multipart field carrying the file.
const IMAGE_FIELD: &str = "image";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    data: Option<UploadedImage>,
}

#[derive(Debug, Deserialize)]
struct UploadedImage {
    url: Option<String>,
}

/// Uploads files to an imgbb-style endpoint and returns `data.url`.
pub struct ImgbbImageHost {
    client: Client,
    upload_url: Url,
    api_key: String,
}

impl ImgbbImageHost {
    pub fn new(upload_url: &str, api_key: impl Into<String>) -> anyhow::Result<Self> {
        Self::with_client(Client::new(), upload_url, api_key)
    }

    pub fn with_client(
        client: Client,
        upload_url: &str,
        api_key: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let upload_url = Url::parse(upload_url)
            .with_context(|| format!("Invalid image host URL: {upload_url}"))?;
        Ok(Self {
            client,
            upload_url,
            api_key: api_key.into(),
        })
    }

    fn build_form(file: &ImageFile) -> Result<Form, ImageHostError> {
        let mut part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        if !file.mime_type.is_empty() {
            part = part
                .mime_str(&file.mime_type)
                .map_err(|e| ImageHostError::Transport(e.to_string()))?;
        }
        Ok(Form::new().part(IMAGE_FIELD, part))
    }
}

#[async_trait]
impl ImageHostPort for ImgbbImageHost {
    #[tracing::instrument(
        name = "infra.image_host.upload",
        skip_all,
        fields(file = %file.name, size_bytes = file.size_bytes)
    )]
    async fn upload(&self, file: &ImageFile) -> Result<String, ImageHostError> {
        let form = Self::build_form(file)?;

        let response = self
            .client
            .post(self.upload_url.clone())
            .query(&[("key", self.api_key.as_str())])
            .multipart(form)
            .send()
            .await
            .map_err(|e| ImageHostError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageHostError::Rejected {
                status: status.as_u16(),
            });
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| ImageHostError::Transport(e.to_string()))?;

        let url = body
            .data
            .and_then(|data| data.url)
            .filter(|url| !url.is_empty())
            .ok_or(ImageHostError::MissingUrl)?;

        debug!(%url, "Image hosted");
        Ok(url)
    }
}
