use super::proto::question_search_server::{QuestionSearch, QuestionSearchServer};
use super::proto::{AnswerOption, Question, SearchRequest, SearchResponse};
use crate::questions::types::{self, QuestionPayload};
use crate::search::engine::SearchService;
use crate::search::error::SearchError;
use crate::search::types::SearchPage;

use tonic::{Request, Response, Status};
use uuid::Uuid;

/// gRPC adapter over [`SearchService`].
#[derive(Clone)]
pub struct QuestionSearchGrpc {
    service: SearchService,
}

impl QuestionSearchGrpc {
    pub fn new(service: SearchService) -> Self {
        Self { service }
    }

    pub fn into_server(self) -> QuestionSearchServer<Self> {
        QuestionSearchServer::new(self)
    }
}

#[tonic::async_trait]
impl QuestionSearch for QuestionSearchGrpc {
    async fn search_questions(
        &self,
        request: Request<SearchRequest>,
    ) -> Result<Response<SearchResponse>, Status> {
        let request_id = Uuid::new_v4();
        let req = request.into_inner();

        tracing::debug!(
            %request_id,
            "gRPC search query={:?} page={} pageSize={}",
            req.query,
            req.page,
            req.page_size
        );

        let search = crate::search::types::SearchRequest::new(
            req.query,
            i64::from(req.page),
            i64::from(req.page_size),
        );

        match self.service.search(&search).await {
            Ok(page) => Ok(Response::new(page.into())),
            Err(e) => {
                match &e {
                    SearchError::InvalidArgument(_) => {
                        tracing::warn!(%request_id, "Invalid search request: {}", e)
                    }
                    _ => tracing::error!(%request_id, "Search failed: {}", e),
                }
                Err(to_status(e))
            }
        }
    }
}

fn to_status(err: SearchError) -> Status {
    match err {
        SearchError::InvalidArgument(message) => Status::invalid_argument(message),
        SearchError::UpstreamUnavailable(_) => Status::unavailable("Question store unavailable"),
        SearchError::Internal(_) => Status::internal("Internal server error"),
    }
}

impl From<types::QuestionOption> for AnswerOption {
    fn from(option: types::QuestionOption) -> Self {
        AnswerOption {
            text: option.text,
            is_correct_answer: option.is_correct_answer,
        }
    }
}

impl From<types::Question> for Question {
    fn from(question: types::Question) -> Self {
        let payload = QuestionPayload::from(question);
        Question {
            id: payload.id,
            title: payload.title,
            r#type: payload.kind.as_str().to_string(),
            options: payload.options.into_iter().map(AnswerOption::from).collect(),
        }
    }
}

impl From<SearchPage> for SearchResponse {
    fn from(page: SearchPage) -> Self {
        SearchResponse {
            questions: page.questions.into_iter().map(Question::from).collect(),
            total: i32::try_from(page.total).unwrap_or(i32::MAX),
        }
    }
}
