use async_trait::async_trait;

use super::errors::ImageHostError;
use crate::image::ImageFile;

/// External collaborator that hosts a local file and returns its public URL.
#[async_trait]
pub trait ImageHostPort: Send + Sync {
    async fn upload(&self, file: &ImageFile) -> Result<String, ImageHostError>;
}
