use std::sync::{Arc, Mutex, MutexGuard};

use gallery_core::ports::{
    ImageApiError, ImageHostError, ImageHostPort, NotifierPort, UploadViewPort,
};
use gallery_core::upload::validate_file;
use gallery_core::{FieldError, FormErrors, ImageFile, NewImage, UploadDraft};
use thiserror::Error;
use tracing::{info, warn};

use super::messages;
use crate::usecases::CreateImage;

/// Why a file could not be attached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachError {
    #[error("{0}")]
    Invalid(FieldError),

    #[error(transparent)]
    Host(#[from] ImageHostError),

    /// The form was reset, or another file was attached, while uploading.
    #[error("attachment superseded")]
    Superseded,
}

/// Result of one `submit()` call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Blocked by validation. Nothing else happened.
    Invalid(FormErrors),
    /// Another submission is still running. Nothing else happened.
    AlreadySubmitting,
    /// No hosted URL at submit time. The create call was skipped.
    MissingImage,
    Created(NewImage),
    Failed(ImageApiError),
}

/// Read-only view of the form for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSnapshot {
    pub title: String,
    pub description: String,
    pub file_name: Option<String>,
    pub resolved_url: Option<String>,
    pub local_preview: Option<String>,
    pub submitting: bool,
}

#[derive(Default)]
struct FormState {
    draft: UploadDraft,
    resolved_url: Option<String>,
    local_preview: Option<String>,
    submitting: bool,
    /// Bumped on every attach and reset so late host uploads can be dropped.
    file_epoch: u64,
}

impl FormState {
    fn hosted_url(&self) -> Option<&str> {
        self.resolved_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Upload form state and submission protocol.
///
/// Holds the draft and the hosted URL resolved by [`ImageHostPort`]. On a valid
/// submit it registers the image through [`CreateImage`], notifies the outcome,
/// then always clears itself and asks the view to close.
pub struct ImageUploadForm {
    create_image: CreateImage,
    image_host: Arc<dyn ImageHostPort>,
    notifier: Arc<dyn NotifierPort>,
    upload_view: Arc<dyn UploadViewPort>,
    state: Mutex<FormState>,
}

impl ImageUploadForm {
    pub fn new(
        create_image: CreateImage,
        image_host: Arc<dyn ImageHostPort>,
        notifier: Arc<dyn NotifierPort>,
        upload_view: Arc<dyn UploadViewPort>,
    ) -> Self {
        Self {
            create_image,
            image_host,
            notifier,
            upload_view,
            state: Mutex::new(FormState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.lock().draft.title = title.into();
    }

    pub fn set_description(&self, description: impl Into<String>) {
        self.lock().draft.description = description.into();
    }

    /// Overrides the hosted URL, e.g. when the file was hosted elsewhere.
    pub fn set_resolved_url(&self, url: Option<String>) {
        self.lock().resolved_url = url;
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let state = self.lock();
        FormSnapshot {
            title: state.draft.title.clone(),
            description: state.draft.description.clone(),
            file_name: state.draft.file.as_ref().map(|f| f.name.clone()),
            resolved_url: state.resolved_url.clone(),
            local_preview: state.local_preview.clone(),
            submitting: state.submitting,
        }
    }

    /// Validates `file`, hosts it and stores the returned URL.
    ///
    /// An invalid file is neither stored nor uploaded.
    #[tracing::instrument(
        name = "usecase.upload_form.attach_file",
        skip(self, file),
        fields(file_name = %file.name, size_bytes = file.size_bytes)
    )]
    pub async fn attach_file(&self, file: ImageFile) -> Result<String, AttachError> {
        validate_file(Some(&file)).map_err(AttachError::Invalid)?;

        let epoch = {
            let mut state = self.lock();
            state.file_epoch += 1;
            state.local_preview = Some(file.name.clone());
            state.resolved_url = None;
            state.draft.file = Some(file.clone());
            state.file_epoch
        };

        let result = self.image_host.upload(&file).await;

        {
            let mut state = self.lock();
            if state.file_epoch != epoch {
                info!("Dropping host upload result for a superseded file");
                return Err(AttachError::Superseded);
            }
            match &result {
                Ok(url) => state.resolved_url = Some(url.clone()),
                Err(_) => state.resolved_url = None,
            }
        }

        match result {
            Ok(url) => {
                info!(url = %url, "Image hosted");
                Ok(url)
            }
            Err(e) => {
                warn!(error = %e, "Image host upload failed");
                self.notifier.notify(messages::host_upload_failed());
                Err(AttachError::Host(e))
            }
        }
    }

    /// Runs the submission protocol.
    ///
    /// Validation failures and concurrent calls return without side effects.
    /// Every other path ends with the form cleared and `close_modal()` called.
    #[tracing::instrument(name = "usecase.upload_form.submit", skip(self))]
    pub async fn submit(&self) -> SubmitOutcome {
        let new_image = {
            let mut state = self.lock();
            if state.submitting {
                return SubmitOutcome::AlreadySubmitting;
            }
            if let Err(errors) = state.draft.validate() {
                info!(errors = %errors, "Submission blocked by validation");
                return SubmitOutcome::Invalid(errors);
            }
            state.submitting = true;
            state
                .hosted_url()
                .map(|url| state.draft.to_new_image(url))
        };

        let outcome = match new_image {
            None => {
                warn!("Submission without a hosted image");
                self.notifier.notify(messages::missing_image());
                SubmitOutcome::MissingImage
            }
            Some(image) => match self.create_image.execute(&image).await {
                Ok(()) => {
                    self.notifier.notify(messages::image_added());
                    SubmitOutcome::Created(image)
                }
                Err(e) => {
                    warn!(error = %e, "Image registration failed");
                    self.notifier.notify(messages::registration_failed());
                    SubmitOutcome::Failed(e)
                }
            },
        };

        self.reset();
        self.upload_view.close_modal();
        outcome
    }

    /// Clears every field and the hosted URL.
    pub fn reset(&self) {
        let mut state = self.lock();
        let file_epoch = state.file_epoch + 1;
        *state = FormState {
            file_epoch,
            ..FormState::default()
        };
    }
}
