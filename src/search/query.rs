use super::error::SearchError;
use crate::questions::types::Question;

/// Longest accepted query, in characters.
pub const MAX_QUERY_LEN: usize = 256;
/// Largest accepted page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Case-insensitive substring match against question titles.
///
/// An empty query matches every question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFilter {
    raw: String,
    lowered: String,
}

impl TitleFilter {
    pub fn new(query: &str) -> Result<Self, SearchError> {
        let len = query.chars().count();
        if len > MAX_QUERY_LEN {
            return Err(SearchError::InvalidArgument(format!(
                "query must be at most {} characters, got {}",
                MAX_QUERY_LEN, len
            )));
        }

        Ok(Self {
            raw: query.to_string(),
            lowered: query.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_match_all(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn matches(&self, question: &Question) -> bool {
        self.is_match_all() || question.title_contains(&self.lowered)
    }

    /// The query as a regular expression that matches it literally.
    pub fn to_regex_pattern(&self) -> String {
        regex::escape(&self.raw)
    }
}

/// A validated page request: 1-indexed `page` of `page_size` matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: u64,
    page_size: u64,
    offset: u64,
}

impl PageWindow {
    pub fn new(page: i64, page_size: i64) -> Result<Self, SearchError> {
        if page < 1 {
            return Err(SearchError::InvalidArgument(format!(
                "page must be at least 1, got {}",
                page
            )));
        }
        if page_size < 1 {
            return Err(SearchError::InvalidArgument(format!(
                "pageSize must be positive, got {}",
                page_size
            )));
        }

        let page = page as u64;
        let page_size = page_size as u64;
        if page_size > MAX_PAGE_SIZE {
            return Err(SearchError::InvalidArgument(format!(
                "pageSize must be at most {}, got {}",
                MAX_PAGE_SIZE, page_size
            )));
        }

        let offset = (page - 1).checked_mul(page_size).ok_or_else(|| {
            SearchError::InvalidArgument(format!("page {} is out of range", page))
        })?;

        Ok(Self {
            page,
            page_size,
            offset,
        })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Number of matches skipped before this page.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }

    /// Number of pages needed to show `total` matches.
    pub fn page_count(&self, total: u64) -> u64 {
        total.div_ceil(self.page_size)
    }
}
