use crate::storage::store::StoreError;

/// Failure of a search. Adapters map each kind to their transport's error
/// shape and never forward the inner detail of `UpstreamUnavailable` or
/// `Internal` to clients.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("question store unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for SearchError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(detail) => SearchError::UpstreamUnavailable(detail),
            other => SearchError::Internal(other.to_string()),
        }
    }
}
