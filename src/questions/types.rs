use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    /// Single correct option.
    #[serde(rename = "MCQ")]
    Mcq,
    /// One or more correct options.
    #[serde(rename = "MCM")]
    Mcm,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Mcq => "MCQ",
            QuestionType::Mcm => "MCM",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = UnknownQuestionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MCQ" => Ok(QuestionType::Mcq),
            "MCM" => Ok(QuestionType::Mcm),
            other => Err(UnknownQuestionType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown question type: {0}")]
pub struct UnknownQuestionType(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    pub text: String,
    pub is_correct_answer: bool,
}

/// A question record as stored in the question bank.
///
/// `blocks` is opaque supplementary content and is never interpreted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "_id", deserialize_with = "record_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<serde_json::Value>,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    #[serde(default)]
    pub solution: Option<String>,
}

impl Question {
    pub fn correct_option_count(&self) -> usize {
        self.options.iter().filter(|o| o.is_correct_answer).count()
    }

    /// Describes a broken answer key, if any. Records are never rejected for
    /// this; callers decide whether to log it.
    pub fn integrity_issue(&self) -> Option<String> {
        if self.options.is_empty() {
            return Some("question has no options".to_string());
        }

        let correct = self.correct_option_count();
        match self.kind {
            QuestionType::Mcq if correct != 1 => Some(format!(
                "MCQ question should have exactly one correct option, found {}",
                correct
            )),
            QuestionType::Mcm if correct == 0 => {
                Some("MCM question has no correct options".to_string())
            }
            _ => None,
        }
    }

    pub fn title_contains(&self, needle_lowercase: &str) -> bool {
        self.title.to_lowercase().contains(needle_lowercase)
    }
}

/// Accepts both a plain string id and the `{"$oid": ...}` form produced by
/// `mongoexport`.
fn record_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RecordId {
        Plain(String),
        Extended {
            #[serde(rename = "$oid")]
            oid: String,
        },
    }

    Ok(match RecordId::deserialize(deserializer)? {
        RecordId::Plain(id) => id,
        RecordId::Extended { oid } => oid,
    })
}

/// Client-facing view of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPayload {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub options: Vec<QuestionOption>,
}

impl From<Question> for QuestionPayload {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            title: question.title,
            kind: question.kind,
            options: question.options,
        }
    }
}
