//! gRPC Transport Module
//!
//! Serves `QuestionSearch.searchQuestions` (see `proto/questions.proto`) on top
//! of the shared `SearchService`.

pub mod service;


pub mod proto {
    #![allow(clippy::all)]
    #![allow(non_snake_case)]
    tonic::include_proto!("question_search");
}

pub use proto::question_search_server::QuestionSearchServer;
pub use service::QuestionSearchGrpc;
