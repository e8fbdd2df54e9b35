//! # gallery-cli
//!
//! Composition root of the image gallery: configuration loading, tracing
//! setup, dependency wiring and the command-line entry points.

pub mod adapters;
pub mod bootstrap;
pub mod cli;
pub mod commands;

pub use bootstrap::run_app;
pub use cli::{Cli, Commands};
