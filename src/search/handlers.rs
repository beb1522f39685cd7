use super::engine::SearchService;
use super::error::SearchError;
use super::types::{ErrorBody, SearchRequestBody, SearchResponseBody};

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub const ENDPOINT_SEARCH: &str = "/search";

/// Error returned by the REST adapter. Only validation messages reach the
/// client verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub fn router(service: SearchService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(ENDPOINT_SEARCH, post(handle_search))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

pub async fn handle_search(
    State(service): State<SearchService>,
    payload: Result<Json<SearchRequestBody>, JsonRejection>,
) -> Result<Json<SearchResponseBody>, ApiError> {
    let request_id = Uuid::new_v4();

    let Json(body) = payload.map_err(|rejection| {
        tracing::warn!(%request_id, "Rejected search payload: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })?;

    tracing::debug!(
        %request_id,
        "REST search query={:?} page={} pageSize={}",
        body.query,
        body.page,
        body.page_size
    );

    match service.search(&body.into()).await {
        Ok(page) => Ok(Json(page.into())),
        Err(SearchError::InvalidArgument(message)) => {
            tracing::warn!(%request_id, "Invalid search request: {}", message);
            Err(ApiError::BadRequest(message))
        }
        Err(e) => {
            tracing::error!(%request_id, "Search failed: {}", e);
            Err(ApiError::Internal)
        }
    }
}
