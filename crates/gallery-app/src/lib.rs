//! Image Gallery Application Orchestration Layer
//!
//! This crate contains the use cases and the two stateful flows of the
//! gallery: the upload form and the paginated image feed.

pub mod deps;
pub mod usecase_factory;
pub mod usecases;

pub use deps::AppDeps;
pub use usecase_factory::UseCases;
