//! # gallery-infra
//!
//! Infrastructure adapters for the image gallery: the reqwest clients for the
//! gallery API and the image host, and the in-memory query cache.

pub mod cache;
pub mod http;

pub use cache::InMemoryQueryCache;
pub use http::{ImgbbImageHost, ReqwestImageApi};
