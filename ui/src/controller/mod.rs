//! Search Controller Module
//!
//! Client-side session logic for interactive search.
//!
//! ## Overview
//! A session moves through `Idle → Debouncing → Loading → {Loaded | Failed}`.
//! Every edit of the query, page or type filter re-arms a debounce timer; only
//! when it expires is a request issued. Each request carries a sequence number
//! and only the response to the latest one is applied.
//!
//! ## Submodules
//! - **`session`**: the synchronous state machine (`SearchSession`) and its snapshot (`SessionView`).
//! - **`driver`**: the async actor (`SearchController`) owning a session, its timer and in-flight request.
//! - **`answers`**: local answer selection and grading.
//! - **`pagination`**: page count and the page button window.

pub mod answers;
pub mod driver;
pub mod pagination;
pub mod session;


pub use answers::{AnswerBook, AnswerError, AnswerSheet};
pub use driver::{ControllerError, ControllerSettings, SearchController};
pub use session::{Applied, Effect, Issued, Phase, QuestionView, SearchSession, SessionView, TypeFilter};
