use quest_search::search::handlers::ENDPOINT_SEARCH;
use quest_search::search::types::{ErrorBody, SearchRequestBody, SearchResponseBody};

use async_trait::async_trait;
use std::time::Duration;

/// Failure of one search round trip, as seen by the client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("could not reach search service: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("search timed out after {0:?}")]
    TimedOut(Duration),
}

/// Anything that can answer a search request.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, request: SearchRequestBody) -> Result<SearchResponseBody, ClientError>;
}

/// Talks to `POST /search` on the REST proxy.
#[derive(Clone)]
pub struct HttpSearchClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSearchClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), ENDPOINT_SEARCH),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SearchBackend for HttpSearchClient {
    async fn search(&self, request: SearchRequestBody) -> Result<SearchResponseBody, ClientError> {
        let resp = self.client.post(&self.endpoint).json(&request).send().await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<SearchResponseBody>().await?);
        }

        let message = match resp.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
        };

        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }
}
