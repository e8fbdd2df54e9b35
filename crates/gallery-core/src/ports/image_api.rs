use async_trait::async_trait;

use super::errors::ImageApiError;
use crate::ids::Cursor;
use crate::image::{ImagePage, NewImage};

/// Remote gallery API.
#[async_trait]
pub trait ImageApiPort: Send + Sync {
    /// Create an image record. Only success or failure is observed.
    async fn create_image(&self, image: &NewImage) -> Result<(), ImageApiError>;

    /// Fetch one page. `after` is omitted for the first page and otherwise
    /// echoes the previous page's cursor verbatim.
    async fn fetch_page(&self, after: Option<&Cursor>) -> Result<ImagePage, ImageApiError>;
}
