//! Suggestion-acquisition pipeline for the `cmdsense` CLI.
//!
//! The flow per invocation is: read recent shell history for context, render
//! a prompt around the user's partial command, then drive a bounded retry
//! loop that asks the local model for a candidate and screens it through the
//! acceptance rules plus an external syntax oracle. The engine either
//! produces a fully validated command or the empty string; nothing in
//! between ever escapes.

mod config;
mod engine;
mod error;
mod history;
mod model;
mod prompt;
mod syntax;
mod validate;

pub use config::Config;
pub use config::find_cmdsense_home;
pub use engine::SuggestionEngine;
pub use error::SuggestError;
pub use history::recent_commands;
pub use model::ModelClient;
pub use model::OllamaModelClient;
pub use prompt::Prompt;
pub use syntax::ShellSyntaxChecker;
pub use syntax::SyntaxChecker;
pub use validate::RejectReason;
pub use validate::SuggestionValidator;
