use super::answers::{AnswerBook, AnswerError};
use super::pagination;
use crate::client::ClientError;

use quest_search::questions::types::{QuestionPayload, QuestionType};
use quest_search::search::types::{SearchRequestBody, SearchResponseBody};
use std::fmt;
use std::str::FromStr;

// ============================================================
// FILTER AND PHASE
// ============================================================

/// Client-side type filter, applied to each fetched page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(QuestionType),
}

impl TypeFilter {
    pub const CHOICES: [TypeFilter; 3] = [
        TypeFilter::All,
        TypeFilter::Only(QuestionType::Mcq),
        TypeFilter::Only(QuestionType::Mcm),
    ];

    pub fn admits(&self, question: &QuestionPayload) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(kind) => question.kind == *kind,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => f.write_str("ALL"),
            TypeFilter::Only(kind) => write!(f, "{}", kind),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if upper == "ALL" {
            return Ok(TypeFilter::All);
        }
        upper
            .parse::<QuestionType>()
            .map(TypeFilter::Only)
            .map_err(|_| format!("unknown type filter {:?}, expected ALL, MCQ or MCM", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Debouncing,
    Loading,
    Loaded,
    Failed(String),
}

// ============================================================
// TRANSITION RESULTS
// ============================================================

/// What the driver has to do with its timer and in-flight request after an
/// edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Re-arm the debounce timer.
    Debounce,
    /// Stop the timer and drop any in-flight request.
    Cancel,
    /// Nothing to schedule.
    None,
}

/// A request the session wants sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issued {
    pub seq: u64,
    pub body: SearchRequestBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    Stale,
}

// ============================================================
// SNAPSHOT
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub question: QuestionPayload,
    pub selected: Vec<usize>,
    pub verdict: Option<bool>,
}

/// Everything a front end needs to draw the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub query: String,
    pub page: u64,
    pub page_size: u64,
    pub filter: TypeFilter,
    pub phase: Phase,
    pub questions: Vec<QuestionView>,
    pub total: u64,
    pub total_pages: u64,
    pub show_pagination: bool,
    pub page_buttons: Vec<u64>,
}

// ============================================================
// SESSION
// ============================================================

/// Shown page after the type filter ran.
#[derive(Debug, Clone, Default)]
struct Shown {
    questions: Vec<QuestionPayload>,
    total: u64,
}

/// State of one interactive search session.
///
/// Pure and synchronous: timers and I/O live in the driver, which calls
/// [`fire`](Self::fire) when the debounce expires and
/// [`apply`](Self::apply) when a response arrives.
#[derive(Debug)]
pub struct SearchSession {
    query: String,
    page: u64,
    page_size: u64,
    filter: TypeFilter,
    phase: Phase,
    latest_seq: u64,
    shown: Shown,
    answers: AnswerBook,
}

impl SearchSession {
    pub fn new(page_size: u64) -> Self {
        Self {
            query: String::new(),
            page: 1,
            page_size: page_size.max(1),
            filter: TypeFilter::All,
            phase: Phase::Idle,
            latest_seq: 0,
            shown: Shown::default(),
            answers: AnswerBook::new(),
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    pub fn total_pages(&self) -> u64 {
        pagination::total_pages(self.shown.total, self.page_size)
    }

    /// A new query always starts from page 1. An empty query ends the session
    /// and invalidates whatever is in flight.
    pub fn set_query(&mut self, query: &str) -> Effect {
        self.query = query.to_string();
        self.page = 1;

        if self.query.is_empty() {
            self.latest_seq += 1;
            self.shown = Shown::default();
            self.answers.clear();
            self.phase = Phase::Idle;
            return Effect::Cancel;
        }

        self.arm()
    }

    pub fn set_page(&mut self, page: u64) -> Effect {
        let page = page.max(1);
        if page == self.page {
            return Effect::None;
        }
        self.page = page;
        self.arm()
    }

    pub fn next_page(&mut self) -> Effect {
        self.set_page(pagination::next_page(self.page, self.total_pages()))
    }

    pub fn prev_page(&mut self) -> Effect {
        self.set_page(pagination::prev_page(self.page))
    }

    pub fn set_filter(&mut self, filter: TypeFilter) -> Effect {
        if filter == self.filter {
            return Effect::None;
        }
        self.filter = filter;
        self.arm()
    }

    /// Any edit supersedes the request in flight, so its response can no
    /// longer land while the new one is still being debounced.
    fn arm(&mut self) -> Effect {
        if self.query.is_empty() {
            return Effect::None;
        }
        self.latest_seq += 1;
        self.phase = Phase::Debouncing;
        Effect::Debounce
    }

    /// Called when the debounce timer expires. Returns the request to send,
    /// or `None` when there is nothing to search for.
    pub fn fire(&mut self) -> Option<Issued> {
        if self.query.is_empty() {
            return None;
        }

        self.latest_seq += 1;
        self.phase = Phase::Loading;

        Some(Issued {
            seq: self.latest_seq,
            body: SearchRequestBody {
                query: self.query.clone(),
                page: i64::try_from(self.page).unwrap_or(i64::MAX),
                page_size: i64::try_from(self.page_size).unwrap_or(i64::MAX),
            },
        })
    }

    /// Applies the outcome of request `seq`. Outcomes of superseded requests
    /// leave the session untouched.
    pub fn apply(&mut self, seq: u64, outcome: Result<SearchResponseBody, ClientError>) -> Applied {
        if seq != self.latest_seq {
            return Applied::Stale;
        }

        match outcome {
            Ok(response) => {
                let questions: Vec<QuestionPayload> = response
                    .questions
                    .into_iter()
                    .filter(|q| self.filter.admits(q))
                    .collect();
                let total = match self.filter {
                    TypeFilter::All => response.total,
                    TypeFilter::Only(_) => questions.len() as u64,
                };
                self.shown = Shown { questions, total };
                self.phase = Phase::Loaded;
            }
            Err(e) => {
                self.shown = Shown::default();
                self.phase = Phase::Failed(e.to_string());
            }
        }
        self.answers.clear();

        Applied::Current
    }

    pub fn select_option(&mut self, question_id: &str, option: usize) -> Result<(), AnswerError> {
        let question = self.find(question_id)?.clone();
        self.answers.select(&question, option)
    }

    /// `Ok(None)` when nothing is selected yet.
    pub fn check_answer(&mut self, question_id: &str) -> Result<Option<bool>, AnswerError> {
        let question = self.find(question_id)?.clone();
        Ok(self.answers.check(&question))
    }

    fn find(&self, question_id: &str) -> Result<&QuestionPayload, AnswerError> {
        self.shown
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or_else(|| AnswerError::UnknownQuestion(question_id.to_string()))
    }

    pub fn view(&self) -> SessionView {
        let total_pages = self.total_pages();

        let questions = self
            .shown
            .questions
            .iter()
            .map(|q| {
                let sheet = self.answers.sheet(&q.id);
                QuestionView {
                    question: q.clone(),
                    selected: sheet
                        .map(|s| s.selected().iter().copied().collect())
                        .unwrap_or_default(),
                    verdict: sheet.and_then(|s| s.verdict()),
                }
            })
            .collect::<Vec<_>>();

        SessionView {
            query: self.query.clone(),
            page: self.page,
            page_size: self.page_size,
            filter: self.filter,
            phase: self.phase.clone(),
            show_pagination: pagination::show_pagination(questions.len(), total_pages),
            page_buttons: pagination::page_buttons(self.page, total_pages),
            questions,
            total: self.shown.total,
            total_pages,
        }
    }
}
