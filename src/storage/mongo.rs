use super::store::{QuestionStore, StoreError};
use crate::questions::types::{Question, QuestionOption, QuestionType};
use crate::search::query::TitleFilter;

use async_trait::async_trait;
use mongodb::bson::{Document, doc, oid::ObjectId};
use mongodb::error::ErrorKind;
use mongodb::{Client, Collection};
use serde::Deserialize;

/// Question record exactly as the collection stores it.
#[derive(Debug, Deserialize)]
struct QuestionDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(rename = "type")]
    kind: QuestionType,
    title: String,
    #[serde(default)]
    blocks: Vec<serde_json::Value>,
    #[serde(default)]
    options: Vec<QuestionOption>,
    #[serde(default)]
    solution: Option<String>,
}

impl From<QuestionDocument> for Question {
    fn from(doc: QuestionDocument) -> Self {
        Question {
            id: doc.id.to_hex(),
            kind: doc.kind,
            title: doc.title,
            blocks: doc.blocks,
            options: doc.options,
            solution: doc.solution.filter(|s| !s.is_empty()),
        }
    }
}

pub struct MongoQuestionStore {
    client: Client,
    collection: Collection<QuestionDocument>,
}

impl MongoQuestionStore {
    pub async fn connect(
        uri: &str,
        fallback_database: &str,
        collection: &str,
    ) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await.map_err(classify)?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(fallback_database));

        tracing::info!(
            "Reading questions from {}.{}",
            database.name(),
            collection
        );

        let collection = database.collection::<QuestionDocument>(collection);

        Ok(Self { client, collection })
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(classify)
    }
}

#[async_trait]
impl QuestionStore for MongoQuestionStore {
    async fn find_by_title(
        &self,
        filter: &TitleFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Question>, StoreError> {
        let mut cursor = self
            .collection
            .find(title_filter(filter))
            .sort(doc! { "_id": 1 })
            .skip(offset)
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await
            .map_err(classify)?;

        let mut questions = Vec::new();
        while cursor.advance().await.map_err(classify)? {
            let document = cursor
                .deserialize_current()
                .map_err(|e| StoreError::Decode(e.to_string()))?;
            questions.push(document.into());
        }

        Ok(questions)
    }

    async fn count_by_title(&self, filter: &TitleFilter) -> Result<u64, StoreError> {
        self.collection
            .count_documents(title_filter(filter))
            .await
            .map_err(classify)
    }

    async fn close(&self) {
        tracing::info!("Closing MongoDB client");
        self.client.clone().shutdown().await;
    }
}

/// Case-insensitive substring match on `title`. The query is escaped, so it
/// is always matched literally.
pub(crate) fn title_filter(filter: &TitleFilter) -> Document {
    if filter.is_match_all() {
        return doc! {};
    }

    doc! {
        "title": {
            "$regex": filter.to_regex_pattern(),
            "$options": "i",
        }
    }
}

fn classify(err: mongodb::error::Error) -> StoreError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. } => StoreError::Unavailable(err.to_string()),
        _ => StoreError::Backend(err.to_string()),
    }
}
