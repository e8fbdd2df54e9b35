//! # gallery-core
//!
//! Core domain models and business logic for the image gallery.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod ids;
pub mod image;
pub mod listing;
pub mod ports;
pub mod query;
pub mod upload;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::{Cursor, ImageId};
pub use image::{ImageFile, ImagePage, ImageRecord, NewImage};
pub use listing::{ListingState, ListingStatus};
pub use query::QueryKey;
pub use upload::{FieldError, FormErrors, UploadDraft, UploadField};
