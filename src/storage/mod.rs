//! Question Storage Module
//!
//! The question bank behind the search path. The core only ever reads from it.
//!
//! ## Backends
//! - **`MongoQuestionStore`**: a MongoDB collection of question records (the production store).
//! - **`MemoryQuestionStore`**: a `DashMap`-backed bank seeded from a JSON file, for local runs and tests.
//!
//! The backend is chosen from the connection string given at startup:
//! `mongodb://` / `mongodb+srv://` for MongoDB, `file://<path>` for the in-memory bank.
//! The resulting client is owned by the caller and closed explicitly at shutdown.

pub mod memory;
pub mod mongo;
pub mod store;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

use memory::MemoryQuestionStore;
use mongo::MongoQuestionStore;
use store::QuestionStore;

const FILE_SCHEME: &str = "file://";

/// Opens the store named by `uri`.
///
/// `database` is only used when a MongoDB URI does not name one itself.
pub async fn open_store(
    uri: &str,
    database: &str,
    collection: &str,
) -> Result<Arc<dyn QuestionStore>> {
    if let Some(path) = uri.strip_prefix(FILE_SCHEME) {
        tracing::info!("Using in-memory question store seeded from {}", path);
        let store = MemoryQuestionStore::load_json_file(Path::new(path))?;
        tracing::info!("Loaded {} questions", store.len());
        return Ok(Arc::new(store));
    }

    if uri.starts_with("mongodb://") || uri.starts_with("mongodb+srv://") {
        let store = MongoQuestionStore::connect(uri, database, collection)
            .await
            .context("Failed to configure MongoDB client")?;

        // The driver connects lazily; an unreachable server is reported per request.
        match store.ping().await {
            Ok(()) => tracing::info!("MongoDB connected"),
            Err(e) => tracing::warn!("MongoDB not reachable at startup: {}", e),
        }

        return Ok(Arc::new(store));
    }

    anyhow::bail!("Unsupported question store URI scheme (expected mongodb://, mongodb+srv:// or file://)")
}
