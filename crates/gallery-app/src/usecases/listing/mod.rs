//! Paginated image listing flow.

mod image_feed;

pub use image_feed::{FeedSnapshot, FetchOutcome, ImageFeed};
