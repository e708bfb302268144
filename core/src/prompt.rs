//! Prompt composition for the completion request.

/// A rendered-once, immutable completion request: the fixed instruction
/// template, the user's partial command, and recent-history context.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    original: String,
    context: Vec<String>,
}

impl Prompt {
    pub fn new(original: String, context: Vec<String>) -> Self {
        Self { original, context }
    }

    /// The partial command the candidate must extend.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Renders the full prompt text sent to the model.
    pub fn render(&self) -> String {
        let context = self.context.join("\n");
        let original = &self.original;
        format!(
            r#"You are an expert Zsh shell assistant.
Given the partial command below, respond with a single valid, executable Zsh command that extends or completes it meaningfully.
You must:
- Include the entire original input command,
- Add relevant flags, options, or arguments to make it a useful, practical command,
- Never just repeat the input command without additions,
- Output only one valid command, no explanations or comments.
- Not include any styling such as markdown.
- Verify whether or not the context given is useful to autocomplete the command and use it if it is.

Examples:
Current command: cd /home/user
Completion: cd /home/user && ls -lah

Current command: git status
Completion: git status --short

Current command: ls
Completion: ls -lh --color=auto

Now complete the following command:

Current command: {original}
Recent commands: {context}
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_embeds_original_and_context() {
        let prompt = Prompt::new(
            "git sta".to_string(),
            vec!["cargo test".to_string(), "git diff".to_string()],
        );
        let text = prompt.render();

        assert!(text.contains("Current command: git sta\n"));
        assert!(text.contains("Recent commands: cargo test\ngit diff"));
    }

    #[test]
    fn render_with_empty_context_still_names_the_command() {
        let prompt = Prompt::new("ls".to_string(), Vec::new());
        let text = prompt.render();

        assert!(text.contains("Current command: ls\n"));
        assert!(text.contains("Recent commands: \n"));
    }
}
