use std::sync::Arc;

use gallery_core::ports::{ImageApiError, ImageApiPort, QueryCachePort};
use gallery_core::{NewImage, QueryKey};
use tracing::info;

/// Use case for creating an image record.
///
/// On success the listing's cached collection is invalidated so that every
/// feed refetches from the first page.
pub struct CreateImage {
    image_api: Arc<dyn ImageApiPort>,
    query_cache: Arc<dyn QueryCachePort>,
}

impl CreateImage {
    pub fn new(image_api: Arc<dyn ImageApiPort>, query_cache: Arc<dyn QueryCachePort>) -> Self {
        Self {
            image_api,
            query_cache,
        }
    }

    #[tracing::instrument(
        name = "usecase.create_image.execute",
        skip(self, image),
        fields(title = %image.title)
    )]
    pub async fn execute(&self, image: &NewImage) -> Result<(), ImageApiError> {
        self.image_api.create_image(image).await?;

        let key = QueryKey::images();
        self.query_cache.invalidate(&key);
        info!(key = %key, "Created image record and invalidated listing");
        Ok(())
    }
}
