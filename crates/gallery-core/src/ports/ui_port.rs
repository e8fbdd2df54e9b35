/// The view containing the upload form, usually a modal.
pub trait UploadViewPort: Send + Sync {
    /// Called once every settled submission, whatever its outcome.
    fn close_modal(&self);
}
