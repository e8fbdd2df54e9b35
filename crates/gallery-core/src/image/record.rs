use serde::{Deserialize, Serialize};

use crate::ids::ImageId;

/// An uploaded image as stored by the backend.
///
/// Records are immutable once created; the client never edits or deletes
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: ImageId,
    pub title: String,
    pub description: String,
    /// Location of the hosted image.
    pub url: String,
    /// Creation timestamp as reported by the server.
    pub ts: f64,
}

/// Body of a create-record request.
///
/// Assembled from the resolved hosted URL and the two validated text fields;
/// lives only for the duration of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewImage {
    pub url: String,
    pub title: String,
    pub description: String,
}
