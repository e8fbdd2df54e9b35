use std::collections::BTreeMap;

use serde::Serialize;

/// Fields of the upload form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadField {
    Image,
    Title,
    Description,
}

/// A single failed validation rule, rendered inline next to its field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum FieldError {
    #[error("File is required")]
    FileRequired,

    #[error("File must be smaller than 10MB")]
    FileTooLarge { size_bytes: u64 },

    #[error("Only PNG, JPEG and GIF files are accepted")]
    UnsupportedFormat { mime_type: String },

    #[error("Title is required")]
    TitleRequired,

    #[error("Description is required")]
    DescriptionRequired,

    #[error("Minimum of {min} characters")]
    TooShort { min: usize },

    #[error("Maximum of {max} characters")]
    TooLong { max: usize },
}

/// Per-field validation errors collected from one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FormErrors {
    errors: BTreeMap<UploadField, FieldError>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` for `field`, keeping an earlier error if one exists.
    pub fn record(&mut self, field: UploadField, error: FieldError) {
        self.errors.entry(field).or_insert(error);
    }

    pub fn get(&self, field: UploadField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (UploadField, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// `Ok(())` when no field failed.
    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field:?}: {error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}
