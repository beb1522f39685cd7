use crate::questions::types::Question;
use crate::search::query::TitleFilter;

use async_trait::async_trait;

/// Failure while reading from the question bank.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached (network, server selection, pool cleared).
    #[error("question store unreachable: {0}")]
    Unavailable(String),
    /// The backend answered with an error.
    #[error("question store error: {0}")]
    Backend(String),
    /// A stored record did not match the question schema.
    #[error("malformed question record: {0}")]
    Decode(String),
}

/// Read access to the question bank.
///
/// Implementations must return matches in ascending identifier order so that
/// consecutive pages never overlap or skip records.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Questions whose title matches `filter`, skipping `offset` matches and
    /// returning at most `limit`.
    async fn find_by_title(
        &self,
        filter: &TitleFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Question>, StoreError>;

    /// Number of questions whose title matches `filter`.
    async fn count_by_title(&self, filter: &TitleFilter) -> Result<u64, StoreError>;

    /// Releases backend resources. Called once at shutdown.
    async fn close(&self) {}
}
