use thiserror::Error;

/// Error taxonomy shared by every domain service.
///
/// Visibility failures deliberately surface as `NotFound` rather than
/// `Forbidden`: the existence of pending or rejected content must not leak
/// to actors who cannot see it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("resource not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("server configuration error: {0}")]
    Configuration(String),

    #[error("upstream service error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("upstream service rate limited the request")]
    RateLimited,

    #[error("upstream reply could not be parsed: {0}")]
    MalformedReply(String),

    #[error("internal server error")]
    InternalServerError,
}
