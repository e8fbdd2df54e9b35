//! # Application Dependencies
//!
//! This module defines the dependency grouping for use case construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - No hidden logic
//! - Just parameter grouping

use std::sync::Arc;

use gallery_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
#[derive(Clone)]
pub struct AppDeps {
    // Remote services
    pub image_api: Arc<dyn ImageApiPort>,
    pub image_host: Arc<dyn ImageHostPort>,

    // Shared between flows
    pub query_cache: Arc<dyn QueryCachePort>,

    // Rendering surface
    pub notifier: Arc<dyn NotifierPort>,
    pub upload_view: Arc<dyn UploadViewPort>,
}
