//! Bounded retry loop around the model, the structural rules, and the
//! syntax oracle.

use crate::error::SuggestError;
use crate::model::ModelClient;
use crate::prompt::Prompt;
use crate::syntax::SyntaxChecker;
use crate::validate::RejectReason;
use crate::validate::SuggestionValidator;

/// Drives up to `max_retries` fully independent attempts and returns the
/// first candidate that passes every acceptance rule, or the empty string
/// when the budget is exhausted ("no confident suggestion").
///
/// Attempts are strictly sequential: attempt n+1 never starts before
/// attempt n's external processes have terminated and the candidate has
/// been screened. The backend may be single-instance on the host, so this
/// ordering is a correctness requirement.
pub struct SuggestionEngine<'a> {
    model: &'a dyn ModelClient,
    syntax: &'a dyn SyntaxChecker,
    validator: &'a SuggestionValidator,
    max_retries: usize,
}

impl<'a> SuggestionEngine<'a> {
    pub fn new(
        model: &'a dyn ModelClient,
        syntax: &'a dyn SyntaxChecker,
        validator: &'a SuggestionValidator,
        max_retries: usize,
    ) -> Self {
        Self {
            model,
            syntax,
            validator,
            max_retries,
        }
    }

    /// Returns either a fully validated command or the empty string. Only a
    /// fatal configuration error (missing backend binary) is an `Err`.
    pub async fn suggest(&self, prompt: &Prompt) -> Result<String, SuggestError> {
        let rendered = prompt.render();
        let original = prompt.original();

        for attempt in 1..=self.max_retries {
            let raw = self.model.complete(&rendered).await?;
            let candidate = raw.trim();

            let reason = match self.validator.screen(candidate, original) {
                Ok(()) => {
                    if self.syntax.check(candidate).await? {
                        tracing::debug!(attempt, "candidate accepted");
                        return Ok(candidate.to_string());
                    }
                    RejectReason::InvalidSyntax
                }
                Err(reason) => reason,
            };

            tracing::debug!(attempt, ?reason, "candidate rejected");
        }

        tracing::debug!("retry budget exhausted; returning no suggestion");
        Ok(String::new())
    }
}
