//! Upload form flow: attach a file to the image host, then register it.

mod form;
pub mod messages;

pub use form::{AttachError, FormSnapshot, ImageUploadForm, SubmitOutcome};
