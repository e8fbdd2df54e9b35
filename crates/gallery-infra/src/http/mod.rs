//! reqwest-backed adapters for the remote services.

pub mod image_api;
pub mod image_host;

pub use image_api::ReqwestImageApi;
pub use image_host::ImgbbImageHost;

/// Normalize a base URL so that relative joins append instead of replace.
fn with_trailing_slash(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}
