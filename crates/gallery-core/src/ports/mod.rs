//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port to `gallery-core/ports`, ask yourself three questions:
//!
//! 1. **Does this port represent a business capability?**
//! 2. **Will it be depended upon by multiple use cases or flows?**
//! 3. **Is it implemented by the infrastructure or surface layer?**
//!
//! If all three answers are **yes**, place it in `gallery-core/ports`.
//! Otherwise, place it in the relevant domain submodule.

pub mod errors;
mod image_api;
mod image_host;
mod notifier;
mod query_cache;
mod ui_port;

pub use errors::{ImageApiError, ImageHostError};
pub use image_api::ImageApiPort;
pub use image_host::ImageHostPort;
pub use notifier::{Notification, NotificationKind, NotifierPort};
pub use query_cache::QueryCachePort;
pub use ui_port::UploadViewPort;
