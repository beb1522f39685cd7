use crate::questions::types::{Question, QuestionPayload};
use serde::{Deserialize, Serialize};

/// Transport-neutral search input, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub page: i64,
    pub page_size: i64,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, page: i64, page_size: i64) -> Self {
        Self {
            query: query.into(),
            page,
            page_size,
        }
    }
}

/// One page of matches plus the count of all matches.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub questions: Vec<Question>,
    pub total: u64,
}

/// `POST /search` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequestBody {
    #[serde(default)]
    pub query: String,
    pub page: i64,
    pub page_size: i64,
}

impl From<SearchRequestBody> for SearchRequest {
    fn from(body: SearchRequestBody) -> Self {
        SearchRequest::new(body.query, body.page, body.page_size)
    }
}

/// `POST /search` success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponseBody {
    pub questions: Vec<QuestionPayload>,
    pub total: u64,
}

impl From<SearchPage> for SearchResponseBody {
    fn from(page: SearchPage) -> Self {
        Self {
            questions: page.questions.into_iter().map(QuestionPayload::from).collect(),
            total: page.total,
        }
    }
}

/// `POST /search` failure body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
