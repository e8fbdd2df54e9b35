//! # Dependency Injection
//!
//! ## Responsibilities
//!
//! - Create the infra implementations (HTTP clients, query cache)
//! - Create the console adapters for the rendering surface
//! - Group them into [`AppDeps`]
//!
//! ## Prohibited
//!
//! - No business logic
//! - No configuration validation beyond what constructing a client requires
//!
//! > **This is the only place allowed to depend on gallery-infra and
//! > gallery-app simultaneously.** The privilege is for assembly only.

use std::sync::Arc;

use gallery_app::AppDeps;
use gallery_core::config::AppConfig;
use gallery_infra::{ImgbbImageHost, InMemoryQueryCache, ReqwestImageApi};

use crate::adapters::{ConsoleNotifier, ConsoleUploadView};

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Gallery API client initialization failed: {0}")]
    ImageApiInit(String),

    #[error("Image host client initialization failed: {0}")]
    ImageHostInit(String),
}

/// Wire every port to its implementation
///
/// # Errors
///
/// Returns [`WiringError`] when a configured URL cannot be parsed.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    let image_api = ReqwestImageApi::new(&config.api_base_url)
        .map_err(|e| WiringError::ImageApiInit(format!("{e:#}")))?;
    let image_host = ImgbbImageHost::new(
        &config.image_host_upload_url,
        config.image_host_api_key.clone(),
    )
    .map_err(|e| WiringError::ImageHostInit(format!("{e:#}")))?;

    tracing::debug!(
        images_url = %image_api.images_url(),
        "Wired gallery dependencies"
    );

    Ok(AppDeps {
        image_api: Arc::new(image_api),
        image_host: Arc::new(image_host),
        query_cache: Arc::new(InMemoryQueryCache::new()),
        notifier: Arc::new(ConsoleNotifier::stderr()),
        upload_view: Arc::new(ConsoleUploadView::new()),
    })
}
