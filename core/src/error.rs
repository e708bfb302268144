use thiserror::Error;

/// Errors that can escape the suggestion pipeline.
///
/// Per-attempt failures (non-zero exit, timeout, rejected candidate) are
/// absorbed by the retry loop and never surface here; only configuration
/// problems that retrying cannot fix do.
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("`{program}` not found on PATH; install it or point to it in config.toml")]
    BackendUnavailable { program: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SuggestError {
    pub(crate) fn backend_unavailable(program: &str) -> Self {
        Self::BackendUnavailable {
            program: program.to_string(),
        }
    }
}
