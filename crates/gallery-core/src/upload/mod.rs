//! Upload form domain: field rules and the draft they are applied to.
//!
//! Rules are static and evaluated locally before a submission is accepted.
//! Each field reports at most one error, the first rule it fails.

mod draft;
mod error;
mod rules;

pub use draft::UploadDraft;
pub use error::{FieldError, FormErrors, UploadField};
pub use rules::{
    validate_description, validate_file, validate_title, DESCRIPTION_MAX_CHARS,
    MAX_FILE_SIZE_BYTES, TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};
