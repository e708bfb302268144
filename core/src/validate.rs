//! Structural acceptance rules for model candidates.
//!
//! The rules run in a fixed order and short-circuit on the first failure,
//! so rejection is cheap and the failing rule is known precisely. They are
//! heuristics: substring containment and a phrase denylist can both
//! misclassify, and that trade-off is accepted. The final, costlier rule
//! (shell syntax) lives behind [`crate::SyntaxChecker`] and is applied by
//! the engine only after everything here passes.

/// First rule a candidate failed. Diagnostic only; never printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The candidate spans multiple lines, which signals an explanation or
    /// code block rather than a single command.
    MultiLine,
    /// The candidate contains a denylisted prose marker.
    BannedPhrase,
    /// The candidate merely echoes the original input.
    EchoOfOriginal,
    /// The original input does not appear verbatim in the candidate.
    MissingOriginal,
    /// The external shell reported the candidate as unparsable.
    InvalidSyntax,
}

/// Applies the ordered structural rules. The denylist is data, supplied at
/// construction, so deployments can tune it without code changes.
#[derive(Debug, Clone)]
pub struct SuggestionValidator {
    banned_phrases: Vec<String>,
}

impl SuggestionValidator {
    pub fn new(banned_phrases: Vec<String>) -> Self {
        let banned_phrases = banned_phrases
            .into_iter()
            .map(|phrase| phrase.to_lowercase())
            .collect();
        Self { banned_phrases }
    }

    /// Runs rules 1-5 (trim, single line, denylist, non-echo, containment)
    /// against `candidate`. `Ok(())` means the candidate is ready for the
    /// syntax check.
    pub fn screen(&self, candidate: &str, original: &str) -> Result<(), RejectReason> {
        let candidate = candidate.trim();
        let original = original.trim();

        if candidate.contains('\n') || candidate.contains('\r') {
            return Err(RejectReason::MultiLine);
        }

        let lowered = candidate.to_lowercase();
        if self
            .banned_phrases
            .iter()
            .any(|phrase| lowered.contains(phrase))
        {
            return Err(RejectReason::BannedPhrase);
        }

        if candidate == original {
            return Err(RejectReason::EchoOfOriginal);
        }

        if !candidate.contains(original) {
            return Err(RejectReason::MissingOriginal);
        }

        Ok(())
    }
}

impl Default for SuggestionValidator {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_BANNED_PHRASES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn line_breaks_are_rejected_regardless_of_content() {
        let validator = SuggestionValidator::default();
        assert_eq!(
            validator.screen("git status --short\nUse -s for short.", "git status"),
            Err(RejectReason::MultiLine)
        );
        assert_eq!(
            validator.screen("git status --short\ruse -s for short", "git status"),
            Err(RejectReason::MultiLine)
        );
    }

    #[test]
    fn trailing_newline_alone_is_trimmed_away() {
        let validator = SuggestionValidator::default();
        assert_eq!(validator.screen("git log --oneline\n", "git log"), Ok(()));
        // Trimming happens before the line-break check, so a trailing CRLF
        // is not a multi-line candidate either.
        assert_eq!(validator.screen("git log --graph\r\n", "git log"), Ok(()));
    }

    #[test]
    fn banned_phrases_match_case_insensitively() {
        let validator = SuggestionValidator::default();
        assert_eq!(
            validator.screen("git status --short # This lists changes", "git status"),
            Err(RejectReason::BannedPhrase)
        );
        assert_eq!(
            validator.screen("Sorry, I cannot help with git status", "git status"),
            Err(RejectReason::BannedPhrase)
        );
    }

    #[test]
    fn banned_phrase_rejects_even_a_containing_superset() {
        // Contains the original and differs from it, but carries prose.
        let validator = SuggestionValidator::default();
        assert_eq!(
            validator.screen("git status --short # you can re-run later", "git status"),
            Err(RejectReason::BannedPhrase)
        );
    }

    #[test]
    fn echo_of_the_original_is_rejected() {
        let validator = SuggestionValidator::default();
        assert_eq!(
            validator.screen("  git log  ", "git log"),
            Err(RejectReason::EchoOfOriginal)
        );
    }

    #[test]
    fn candidate_must_contain_the_original_verbatim() {
        let validator = SuggestionValidator::default();
        assert_eq!(
            validator.screen("git log --oneline", "git lg"),
            Err(RejectReason::MissingOriginal)
        );
    }

    #[test]
    fn screening_is_trim_idempotent() {
        let validator = SuggestionValidator::default();
        let cases = [
            ("  git log --oneline  ", " git log "),
            ("git log --oneline\n", "git log"),
            ("  git log  ", "  git log  "),
        ];
        for (candidate, original) in cases {
            assert_eq!(
                validator.screen(candidate, original),
                validator.screen(candidate.trim(), original.trim()),
                "screen() must agree with its own trimming for {candidate:?}/{original:?}"
            );
        }
    }

    #[test]
    fn well_formed_completion_passes_screening() {
        let validator = SuggestionValidator::default();
        assert_eq!(validator.screen("cd /home/user && du -sh *", "cd /home/user"), Ok(()));
    }

    #[test]
    fn custom_denylist_replaces_the_default() {
        let validator = SuggestionValidator::new(vec!["FORBIDDEN".to_string()]);
        assert_eq!(
            validator.screen("git status --short # forbidden", "git status"),
            Err(RejectReason::BannedPhrase)
        );
        // "try" is only in the default list.
        assert_eq!(validator.screen("git status --short; try-tool", "git status"), Ok(()));
    }
}
