//! Question Data Model
//!
//! Domain types for the question bank and the wire shape shared by the REST
//! adapter and the client.
//!
//! ## Shapes
//! - **`Question`**: a record as read from the store (`_id`, `type`, `title`,
//!   `blocks`, `options`, `solution`).
//! - **`QuestionPayload`**: the trimmed view sent to clients
//!   (`id`, `title`, `type`, `options`).
//!
//! Option correctness travels with every payload, so clients can grade answers
//! locally. Anything that must hide the answer key has to drop `options[].isCorrectAnswer`
//! before it leaves the server.

pub mod types;
