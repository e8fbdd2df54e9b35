use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::FieldError;
use crate::image::ImageFile;

/// Files must be strictly smaller than this.
pub const MAX_FILE_SIZE_BYTES: u64 = 10_000_000;
pub const TITLE_MIN_CHARS: usize = 2;
pub const TITLE_MAX_CHARS: usize = 20;
pub const DESCRIPTION_MAX_CHARS: usize = 65;

/// Accepts a MIME type containing `jpeg`, `gif` or `png` after at least one
/// character outside a query or fragment, e.g. `image/png`. Case-sensitive.
static ACCEPTED_MIME_TYPES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^?#](?:jpeg|gif|png)").expect("accepted MIME pattern is valid")
});

/// File name extensions accepted when the MIME type is unknown.
static ACCEPTED_EXTENSIONS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:jpe?g|gif|png)$").expect("accepted extensions pattern is valid")
});

fn has_accepted_format(file: &ImageFile) -> bool {
    if !file.mime_type.is_empty() {
        return ACCEPTED_MIME_TYPES.is_match(&file.mime_type);
    }
    Path::new(&file.name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.is_match(ext))
}

/// Validates the attached file: required, size, then format.
///
/// The MIME type is matched when present; otherwise only the file name's
/// extension is.
pub fn validate_file(file: Option<&ImageFile>) -> Result<(), FieldError> {
    let file = file.ok_or(FieldError::FileRequired)?;

    if file.size_bytes >= MAX_FILE_SIZE_BYTES {
        return Err(FieldError::FileTooLarge {
            size_bytes: file.size_bytes,
        });
    }

    if !has_accepted_format(file) {
        return Err(FieldError::UnsupportedFormat {
            mime_type: file.mime_type.clone(),
        });
    }

    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), FieldError> {
    if title.is_empty() {
        return Err(FieldError::TitleRequired);
    }
    let chars = title.chars().count();
    if chars < TITLE_MIN_CHARS {
        return Err(FieldError::TooShort {
            min: TITLE_MIN_CHARS,
        });
    }
    if chars > TITLE_MAX_CHARS {
        return Err(FieldError::TooLong {
            max: TITLE_MAX_CHARS,
        });
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), FieldError> {
    if description.is_empty() {
        return Err(FieldError::DescriptionRequired);
    }
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(FieldError::TooLong {
            max: DESCRIPTION_MAX_CHARS,
        });
    }
    Ok(())
}
