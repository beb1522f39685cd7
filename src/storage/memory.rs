use super::store::{QuestionStore, StoreError};
use crate::questions::types::Question;
use crate::search::query::TitleFilter;

use anyhow::{Context, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use std::path::Path;

/// In-process question bank keyed by question id.
pub struct MemoryQuestionStore {
    questions: DashMap<String, Question>,
}

impl MemoryQuestionStore {
    pub fn new() -> Self {
        Self {
            questions: DashMap::new(),
        }
    }

    pub fn from_questions(questions: impl IntoIterator<Item = Question>) -> Self {
        let store = Self::new();
        for question in questions {
            store.insert(question);
        }
        store
    }

    /// Reads a JSON array of question records (the store's document shape).
    pub fn load_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read question file {}", path.display()))?;
        let questions: Vec<Question> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse question file {}", path.display()))?;

        Ok(Self::from_questions(questions))
    }

    /// Seeds a record. Later inserts with the same id replace earlier ones.
    pub fn insert(&self, question: Question) {
        if let Some(issue) = question.integrity_issue() {
            tracing::warn!("Question {}: {}", question.id, issue);
        }
        self.questions.insert(question.id.clone(), question);
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    fn matching(&self, filter: &TitleFilter) -> Vec<Question> {
        let mut matches: Vec<Question> = self
            .questions
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();

        matches.sort_by(|a, b| a.id.cmp(&b.id));
        matches
    }
}

impl Default for MemoryQuestionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionStore for MemoryQuestionStore {
    async fn find_by_title(
        &self,
        filter: &TitleFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Question>, StoreError> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(self
            .matching(filter)
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect())
    }

    async fn count_by_title(&self, filter: &TitleFilter) -> Result<u64, StoreError> {
        let count = self
            .questions
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .count();
        Ok(count as u64)
    }
}
