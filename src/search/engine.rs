use super::error::SearchError;
use super::query::{PageWindow, TitleFilter};
use super::types::{SearchPage, SearchRequest};
use crate::storage::store::QuestionStore;

use std::sync::Arc;

/// The single search implementation behind every transport.
///
/// Stateless apart from the injected store client, so one instance is shared
/// by all concurrent requests.
#[derive(Clone)]
pub struct SearchService {
    store: Arc<dyn QuestionStore>,
}

impl SearchService {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// Returns the requested page of questions whose title contains the query
    /// (case-insensitive), ordered by id, together with the total match count.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchPage, SearchError> {
        let filter = TitleFilter::new(&request.query)?;
        let window = PageWindow::new(request.page, request.page_size)?;

        let total = self.store.count_by_title(&filter).await?;

        if window.offset() >= total {
            tracing::debug!(
                "Page {} is past the last page ({} of size {})",
                window.page(),
                window.page_count(total),
                window.page_size()
            );
            return Ok(SearchPage {
                questions: Vec::new(),
                total,
            });
        }

        let questions = self
            .store
            .find_by_title(&filter, window.offset(), window.limit())
            .await?;

        Ok(SearchPage { questions, total })
    }
}
