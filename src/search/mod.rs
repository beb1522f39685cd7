//! Search Service Module
//!
//! The query path: a free-text query and a page request in, one bounded page of
//! matching questions and the total match count out.
//!
//! ## Overview
//! Both transports (REST here, gRPC in `crate::grpc`) call the same
//! `SearchService`, so they cannot drift apart.
//!
//! ## Rules
//! - **Matching**: case-insensitive substring of the question title. An empty query matches everything.
//! - **Ordering**: ascending question id, so pages are stable between calls.
//! - **Pagination**: `page` is 1-indexed; pages past the end are empty, not errors.
//! - **Total**: counts all matches and does not depend on the page.
//!
//! ## Submodules
//! - **`engine`**: `SearchService`, the store-backed search.
//! - **`query`**: validation of the query string and the page window.
//! - **`handlers`**: the REST adapter (`POST /search`).
//! - **`types`**: request/response DTOs.
//! - **`error`**: the `SearchError` kinds.

pub mod engine;
pub mod error;
pub mod handlers;
pub mod query;
pub mod types;
