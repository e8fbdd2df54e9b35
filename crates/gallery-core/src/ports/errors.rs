use thiserror::Error;

/// Failures of the gallery REST API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Failures of the external image host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageHostError {
    #[error("upload failed: {0}")]
    Transport(String),

    #[error("image host rejected upload with status {status}")]
    Rejected { status: u16 },

    #[error("image host returned no url")]
    MissingUrl,
}
