//! Model backend invocation.
//!
//! Each attempt is a fresh, non-interactive `ollama run <model>` process:
//! prompt in via stdin, candidate out via stdout, stderr discarded. The
//! backend is presumed single-instance on the host, so callers must never
//! have two invocations in flight at once.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::SuggestError;

/// Seam over the inference backend so the engine can be driven by scripted
/// stubs in tests.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Runs one inference attempt and returns the raw candidate text.
    ///
    /// A failed attempt (non-zero exit, timeout) yields an empty string;
    /// only an unusable backend is an error.
    async fn complete(&self, prompt: &str) -> Result<String, SuggestError>;
}

#[derive(Debug, Clone)]
pub struct OllamaModelClient {
    program: String,
    model: String,
    timeout: Duration,
}

impl OllamaModelClient {
    pub fn new(program: String, model: String, timeout: Duration) -> Self {
        Self {
            program,
            model,
            timeout,
        }
    }
}

#[async_trait]
impl ModelClient for OllamaModelClient {
    async fn complete(&self, prompt: &str) -> Result<String, SuggestError> {
        let mut handler = tokio::process::Command::new(&self.program);
        handler
            .arg("run")
            .arg(&self.model)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let mut child = match handler.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SuggestError::backend_unavailable(&self.program));
            }
            Err(e) => return Err(SuggestError::Io(e)),
        };

        if let Some(mut stdin) = child.stdin.take() {
            // Dropping stdin closes the pipe so the backend sees EOF. A
            // backend that dies before reading (bad model name, startup
            // failure) breaks the pipe mid-write; that is a per-attempt
            // failure reported by the exit status below, not an error here.
            let write_result = async {
                stdin.write_all(prompt.as_bytes()).await?;
                stdin.shutdown().await
            }
            .await;
            match write_result {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                    tracing::debug!("{} closed stdin before reading the prompt", self.program);
                }
                Err(e) => return Err(SuggestError::Io(e)),
            }
        }

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(output) => output?,
            Err(_) => {
                // kill_on_drop tears the child down; the attempt just
                // produced nothing usable.
                tracing::warn!(
                    "{} run {} timed out after {:?}",
                    self.program,
                    self.model,
                    self.timeout
                );
                return Ok(String::new());
            }
        };

        if !output.status.success() {
            tracing::debug!(
                "{} run {} exited with {}; treating attempt as empty",
                self.program,
                self.model,
                output.status
            );
            return Ok(String::new());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
