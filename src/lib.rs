//! Question Search Library
//!
//! Backend for searching a bank of multiple-choice questions by title, served
//! over both gRPC and a REST proxy. The binary (`main.rs`) only parses the
//! configuration and hands over to [`server::run`].
//!
//! ## Modules
//! - **`questions`**: the question record and its client-facing payload.
//! - **`storage`**: the `QuestionStore` trait with MongoDB and in-memory backends.
//! - **`search`**: `SearchService` (substring match + pagination) and the REST adapter.
//! - **`grpc`**: the `QuestionSearch.searchQuestions` adapter.
//! - **`config`**: command line / environment configuration.
//! - **`server`**: startup, listeners and graceful shutdown.

pub mod config;
pub mod grpc;
pub mod questions;
pub mod search;
pub mod server;
pub mod storage;
