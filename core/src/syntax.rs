//! Shell-syntax oracle: can this string be parsed as a command without
//! running it?

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::SuggestError;

/// Seam over the external parse-only check so the interpreter can be
/// swapped or stubbed in tests.
#[async_trait]
pub trait SyntaxChecker: Send + Sync {
    /// Returns whether `candidate` parses as valid shell syntax. Never
    /// executes the candidate.
    async fn check(&self, candidate: &str) -> Result<bool, SuggestError>;
}

/// Production checker: spawns the configured shell in no-exec mode
/// (`zsh -n -c <candidate>`) and reads only its exit status.
#[derive(Debug, Clone)]
pub struct ShellSyntaxChecker {
    program: String,
    timeout: Duration,
}

impl ShellSyntaxChecker {
    pub fn new(program: String, timeout: Duration) -> Self {
        Self { program, timeout }
    }
}

#[async_trait]
impl SyntaxChecker for ShellSyntaxChecker {
    async fn check(&self, candidate: &str) -> Result<bool, SuggestError> {
        let mut handler = tokio::process::Command::new(&self.program);
        handler
            .arg("-n")
            .arg("-c")
            .arg(candidate)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let mut child = match handler.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SuggestError::backend_unavailable(&self.program));
            }
            Err(e) => {
                tracing::warn!("failed to spawn {} for syntax check: {e}", self.program);
                return Ok(false);
            }
        };

        match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(Ok(status)) => Ok(status.success()),
            Ok(Err(e)) => {
                tracing::warn!("syntax check via {} failed: {e}", self.program);
                Ok(false)
            }
            Err(_) => {
                // kill_on_drop reaps the stuck child when `child` goes away.
                tracing::warn!("syntax check via {} timed out", self.program);
                Ok(false)
            }
        }
    }
}
