//! Business logic use cases
//!
//! ```text
//! [ImageUploadForm] --attach--> ImageHostPort
//!        │
//!        └──submit──> CreateImage ──> ImageApiPort
//!                          │
//!                          └─ invalidate("images") ─> QueryCachePort
//!                                                          │
//! [ImageFeed] <──────── generation / subscribe ────────────┘
//!        └── fetch_page(after) ──> ImageApiPort
//! ```

pub mod create_image;
pub mod listing;
pub mod upload;

pub use create_image::CreateImage;
pub use listing::{FeedSnapshot, FetchOutcome, ImageFeed};
pub use upload::{AttachError, FormSnapshot, ImageUploadForm, SubmitOutcome};
