//! # Use Cases Accessor
//!
//! Wires `Arc<dyn Port>` from [`AppDeps`] into use cases and flows.
//!
//! ## Adding New Use Cases
//!
//! 1. Ensure the use case has a `new()` constructor taking its required ports
//! 2. Add a method to `UseCases` that calls `new()` with deps
//! 3. Commands can now call `usecases.your_use_case()`

use std::sync::Arc;

use crate::deps::AppDeps;
use crate::usecases::{CreateImage, ImageFeed, ImageUploadForm};

pub struct UseCases<'a> {
    deps: &'a AppDeps,
}

impl<'a> UseCases<'a> {
    pub fn new(deps: &'a AppDeps) -> Self {
        Self { deps }
    }

    pub fn create_image(&self) -> CreateImage {
        CreateImage::new(self.deps.image_api.clone(), self.deps.query_cache.clone())
    }

    /// A fresh upload form with an empty draft.
    pub fn image_upload_form(&self) -> ImageUploadForm {
        ImageUploadForm::new(
            self.create_image(),
            self.deps.image_host.clone(),
            self.deps.notifier.clone(),
            self.deps.upload_view.clone(),
        )
    }

    /// A fresh, unmounted image feed over the shared query cache.
    pub fn image_feed(&self) -> Arc<ImageFeed> {
        Arc::new(ImageFeed::new(
            self.deps.image_api.clone(),
            self.deps.query_cache.clone(),
        ))
    }
}
