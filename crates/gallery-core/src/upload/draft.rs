use super::{validate_description, validate_file, validate_title, FormErrors, UploadField};
use crate::image::{ImageFile, NewImage};

/// Current values of the upload form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadDraft {
    pub file: Option<ImageFile>,
    pub title: String,
    pub description: String,
}

impl UploadDraft {
    /// Runs every field rule and collects one error per failing field.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();

        if let Err(e) = validate_file(self.file.as_ref()) {
            errors.record(UploadField::Image, e);
        }
        if let Err(e) = validate_title(&self.title) {
            errors.record(UploadField::Title, e);
        }
        if let Err(e) = validate_description(&self.description) {
            errors.record(UploadField::Description, e);
        }

        errors.into_result()
    }

    /// Builds the create-record body from the text fields and a hosted URL.
    pub fn to_new_image(&self, url: impl Into<String>) -> NewImage {
        NewImage {
            url: url.into(),
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}
