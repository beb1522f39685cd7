//! Question Search Terminal Client
//!
//! Interactive front end for the `/search` REST endpoint. Keystrokes (lines)
//! are fed to a [`controller::SearchController`], which debounces them, issues
//! at most one live request, drops stale responses and publishes a
//! [`controller::SessionView`] that [`render`] turns into text.
//!
//! ## Modules
//! - **`client`**: the `SearchBackend` trait and its HTTP implementation.
//! - **`controller`**: session state machine, answer checking, pagination and the async driver.
//! - **`commands`**: parsing of the REPL input language.
//! - **`render`**: plain-text rendering of a session snapshot.
//! - **`config`**: environment configuration.

pub mod client;
pub mod commands;
pub mod config;
pub mod controller;
pub mod render;
