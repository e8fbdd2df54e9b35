use std::path::Path;

use anyhow::{anyhow, bail, Context};
use gallery_app::usecases::{AttachError, SubmitOutcome};
use gallery_app::UseCases;
use gallery_core::upload::MAX_FILE_SIZE_BYTES;
use gallery_core::{FieldError, ImageFile, NewImage, UploadDraft};
use image::ImageFormat;

use crate::cli::UploadArgs;

/// Reads a local file. The MIME type is guessed from the extension and left
/// empty when unknown, so validation falls back to the file name.
///
/// Files at or above the size limit are rejected from their metadata without
/// being read.
pub fn read_image_file(path: &Path) -> anyhow::Result<ImageFile> {
    let size_bytes = std::fs::metadata(path)
        .with_context(|| format!("Failed to read image file: {}", path.display()))?
        .len();
    if size_bytes >= MAX_FILE_SIZE_BYTES {
        bail!(
            "Invalid upload: Image: {}",
            FieldError::FileTooLarge { size_bytes }
        );
    }

    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read image file: {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime_type = ImageFormat::from_path(path)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_default();

    Ok(ImageFile::new(name, mime_type, bytes))
}

/// Hosts the file, then submits the upload form.
///
/// Every field is validated before anything is sent, so an invalid title does
/// not leave an orphaned file on the image host.
#[tracing::instrument(name = "command.upload_image", skip(usecases, args), fields(path = %args.path.display()))]
pub async fn upload_image(usecases: &UseCases<'_>, args: &UploadArgs) -> anyhow::Result<NewImage> {
    let file = read_image_file(&args.path)?;

    let draft = UploadDraft {
        file: Some(file.clone()),
        title: args.title.clone(),
        description: args.description.clone(),
    };
    if let Err(errors) = draft.validate() {
        bail!("Invalid upload: {errors}");
    }

    let form = usecases.image_upload_form();
    form.set_title(args.title.clone());
    form.set_description(args.description.clone());

    match form.attach_file(file).await {
        Ok(_) => {}
        Err(AttachError::Invalid(e)) => bail!("Invalid upload: Image: {e}"),
        Err(e) => return Err(anyhow!(e)).context("Failed to host the image"),
    }

    match form.submit().await {
        SubmitOutcome::Created(image) => Ok(image),
        SubmitOutcome::Invalid(errors) => bail!("Invalid upload: {errors}"),
        SubmitOutcome::AlreadySubmitting => bail!("An upload is already in progress"),
        SubmitOutcome::MissingImage => bail!("The image host returned no URL"),
        SubmitOutcome::Failed(e) => Err(anyhow!(e)).context("Failed to register the image"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_image_file_guesses_mime_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pic.jpg");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(&[0xFF, 0xD8, 0xFF])
            .unwrap();

        let file = read_image_file(&path).unwrap();

        assert_eq!(file.name, "pic.jpg");
        assert_eq!(file.mime_type, "image/jpeg");
        assert_eq!(file.size_bytes, 3);
    }

    #[test]
    fn test_read_image_file_unknown_extension_has_empty_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notpng.txt");
        std::fs::write(&path, b"hello").unwrap();

        let file = read_image_file(&path).unwrap();

        assert_eq!(file.mime_type, "");
        assert_eq!(
            gallery_core::upload::validate_file(Some(&file)),
            Err(FieldError::UnsupportedFormat {
                mime_type: String::new()
            })
        );
    }

    #[test]
    fn test_read_image_file_rejects_oversized_file_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.png");
        std::fs::File::create(&path)
            .unwrap()
            .set_len(64_000_000)
            .unwrap();

        let err = read_image_file(&path).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid upload: Image: File must be smaller than 10MB"
        );
    }

    #[test]
    fn test_read_image_file_at_limit_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edge.png");
        std::fs::File::create(&path)
            .unwrap()
            .set_len(MAX_FILE_SIZE_BYTES)
            .unwrap();

        assert!(read_image_file(&path).is_err());
    }

    #[test]
    fn test_read_missing_file_fails_with_path() {
        let err = read_image_file(Path::new("/nonexistent/pic.png")).unwrap_err();

        assert!(err.to_string().contains("/nonexistent/pic.png"));
    }
}
