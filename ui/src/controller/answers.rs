use quest_search::questions::types::{QuestionPayload, QuestionType};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("question {0} is not on this page")]
    UnknownQuestion(String),

    #[error("question {question_id} has {count} options, option {option} does not exist")]
    OptionOutOfRange {
        question_id: String,
        option: usize,
        count: usize,
    },
}

/// Selection and last verdict for one question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    selected: BTreeSet<usize>,
    verdict: Option<bool>,
}

impl AnswerSheet {
    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    /// `None` until checked, and again after the selection changes.
    pub fn verdict(&self) -> Option<bool> {
        self.verdict
    }
}

/// Answer sheets for the questions on the current page, keyed by question id.
#[derive(Debug, Clone, Default)]
pub struct AnswerBook {
    sheets: HashMap<String, AnswerSheet>,
}

impl AnswerBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// MCQ selection replaces the previous choice; MCM selection toggles.
    pub fn select(&mut self, question: &QuestionPayload, option: usize) -> Result<(), AnswerError> {
        if option >= question.options.len() {
            return Err(AnswerError::OptionOutOfRange {
                question_id: question.id.clone(),
                option,
                count: question.options.len(),
            });
        }

        let sheet = self.sheets.entry(question.id.clone()).or_default();
        match question.kind {
            QuestionType::Mcq => {
                sheet.selected.clear();
                sheet.selected.insert(option);
            }
            QuestionType::Mcm => {
                if !sheet.selected.remove(&option) {
                    sheet.selected.insert(option);
                }
            }
        }
        sheet.verdict = None;

        Ok(())
    }

    /// Grades the current selection. Returns `None` and records nothing when
    /// no option is selected.
    pub fn check(&mut self, question: &QuestionPayload) -> Option<bool> {
        let sheet = self.sheets.get_mut(&question.id)?;
        if sheet.selected.is_empty() {
            return None;
        }

        let correct = grade(question, &sheet.selected);
        sheet.verdict = Some(correct);
        Some(correct)
    }

    pub fn sheet(&self, question_id: &str) -> Option<&AnswerSheet> {
        self.sheets.get(question_id)
    }

    pub fn clear(&mut self) {
        self.sheets.clear();
    }
}

/// True when `selected` is exactly the set of correct options.
pub fn grade(question: &QuestionPayload, selected: &BTreeSet<usize>) -> bool {
    let correct: BTreeSet<usize> = question
        .options
        .iter()
        .enumerate()
        .filter(|(_, o)| o.is_correct_answer)
        .map(|(i, _)| i)
        .collect();

    !correct.is_empty() && &correct == selected
}
