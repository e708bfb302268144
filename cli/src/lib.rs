// stdout is the contract with the invoking shell: exactly one line, either
// the accepted command or an empty string. Everything else goes to stderr.
#![deny(clippy::print_stdout)]

use std::io::IsTerminal;

use clap::Parser;
use cmdsense_core::Config;
use cmdsense_core::OllamaModelClient;
use cmdsense_core::Prompt;
use cmdsense_core::ShellSyntaxChecker;
use cmdsense_core::SuggestionEngine;
use cmdsense_core::SuggestionValidator;
use cmdsense_core::find_cmdsense_home;
use cmdsense_core::recent_commands;
use tracing_subscriber::EnvFilter;

/// Complete a partially typed shell command with a local model.
///
/// All arguments are joined with single spaces to form the partial command;
/// no flags are parsed. The completed command (or an empty line when no
/// confident suggestion was found) is printed to stdout for the calling
/// shell to insert.
#[derive(Debug, Parser)]
#[command(version, bin_name = "cmdsense")]
pub struct Cli {
    /// The partial command to complete, e.g. `cmdsense git sta`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

pub async fn run_main(cli: Cli) -> anyhow::Result<()> {
    // Default to errors only; RUST_LOG opens it up for debugging.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("error"))
        .unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let original = cli.words.join(" ").trim().to_string();
    if original.is_empty() {
        // Documented degenerate case: nothing to complete, nothing to
        // suggest. Not an error from the calling shell's point of view.
        print_suggestion("");
        return Ok(());
    }

    let cmdsense_home = find_cmdsense_home()?;
    let config = Config::load(&cmdsense_home)?;

    let context = recent_commands(&config.history_file, config.history_limit);
    tracing::debug!("using {} history commands as context", context.len());

    let model = OllamaModelClient::new(
        config.ollama_program.clone(),
        config.model.clone(),
        config.model_timeout,
    );
    let syntax = ShellSyntaxChecker::new(config.syntax_shell.clone(), config.syntax_timeout);
    let validator = SuggestionValidator::new(config.banned_phrases.clone());
    let engine = SuggestionEngine::new(&model, &syntax, &validator, config.max_retries);

    let prompt = Prompt::new(original, context);
    let suggestion = engine.suggest(&prompt).await?;

    print_suggestion(&suggestion);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_suggestion(suggestion: &str) {
    println!("{suggestion}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn words_join_with_single_spaces() {
        let cli = Cli::parse_from(["cmdsense", "git", "sta"]);
        assert_eq!(cli.words.join(" "), "git sta");
    }

    #[test]
    fn hyphenated_words_are_not_parsed_as_flags() {
        let cli = Cli::parse_from(["cmdsense", "ls", "-la", "--color"]);
        assert_eq!(cli.words.join(" "), "ls -la --color");
    }

    #[test]
    fn no_arguments_means_empty_original() {
        let cli = Cli::parse_from(["cmdsense"]);
        assert!(cli.words.is_empty());
    }
}
