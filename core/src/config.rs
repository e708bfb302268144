//! Runtime configuration, loaded from `$CMDSENSE_HOME/config.toml`.
//!
//! Every field is optional in the file; missing fields fall back to the
//! documented defaults below so a fresh install needs no config at all.
//! Components receive their settings explicitly at construction, which is
//! also what lets the tests substitute paths and stub backends freely.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

pub const CONFIG_TOML_FILE: &str = "config.toml";

/// Default model passed to `ollama run` when the config does not name one.
pub const DEFAULT_MODEL: &str = "deepseek-coder-v2:16b";

const DEFAULT_HISTORY_FILE: &str = ".zsh_history";
const DEFAULT_HISTORY_LIMIT: usize = 30;
const DEFAULT_MAX_RETRIES: usize = 3;
const DEFAULT_OLLAMA_PROGRAM: &str = "ollama";
const DEFAULT_SYNTAX_SHELL: &str = "zsh";
const DEFAULT_MODEL_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_SYNTAX_TIMEOUT: Duration = Duration::from_secs(5);

/// Phrases that mark model output as prose rather than a command. Matched
/// case-insensitively against the whole candidate.
pub const DEFAULT_BANNED_PHRASES: &[&str] = &[
    "this", "command", "will", "does", "you can", "try", "note", "sorry",
];

/// Returns the directory that holds `config.toml`.
///
/// Honors the `CMDSENSE_HOME` environment variable when set so users (and
/// tests) can override the default `~/.cmdsense` location.
pub fn find_cmdsense_home() -> std::io::Result<PathBuf> {
    if let Ok(val) = std::env::var("CMDSENSE_HOME")
        && !val.is_empty()
    {
        return Ok(PathBuf::from(val));
    }

    let mut p = dirs::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "could not find home directory",
        )
    })?;
    p.push(".cmdsense");
    Ok(p)
}

/// On-disk shape of `config.toml`. All fields optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigToml {
    history_file: Option<PathBuf>,
    history_limit: Option<usize>,
    max_retries: Option<usize>,
    model: Option<String>,
    ollama_program: Option<String>,
    syntax_shell: Option<String>,
    banned_phrases: Option<Vec<String>>,
    model_timeout_secs: Option<u64>,
    syntax_timeout_secs: Option<u64>,
}

/// Fully resolved configuration handed to the pipeline components.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Shell history file providing prompt context.
    pub history_file: PathBuf,
    /// How many trailing history lines to consider.
    pub history_limit: usize,
    /// Model-invocation attempts before giving up.
    pub max_retries: usize,
    /// Model name passed to `ollama run`.
    pub model: String,
    /// Inference executable.
    pub ollama_program: String,
    /// Shell executable used for parse-only syntax checks.
    pub syntax_shell: String,
    /// Denylist of prose markers; candidates containing any are rejected.
    pub banned_phrases: Vec<String>,
    pub model_timeout: Duration,
    pub syntax_timeout: Duration,
}

impl Config {
    /// Loads the config file under `cmdsense_home`, or pure defaults when it
    /// does not exist. A file that exists but fails to parse is a fatal
    /// configuration error.
    pub fn load(cmdsense_home: &std::path::Path) -> std::io::Result<Self> {
        let path = cmdsense_home.join(CONFIG_TOML_FILE);
        let config_toml = match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str::<ConfigToml>(&contents).map_err(|e| {
                std::io::Error::other(format!("failed to parse {}: {e}", path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => ConfigToml::default(),
            Err(e) => return Err(e),
        };
        Ok(Self::from_toml(config_toml))
    }

    fn from_toml(config_toml: ConfigToml) -> Self {
        let ConfigToml {
            history_file,
            history_limit,
            max_retries,
            model,
            ollama_program,
            syntax_shell,
            banned_phrases,
            model_timeout_secs,
            syntax_timeout_secs,
        } = config_toml;

        Self {
            history_file: history_file.unwrap_or_else(default_history_file),
            history_limit: history_limit.unwrap_or(DEFAULT_HISTORY_LIMIT),
            max_retries: max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            ollama_program: ollama_program.unwrap_or_else(|| DEFAULT_OLLAMA_PROGRAM.to_string()),
            syntax_shell: syntax_shell.unwrap_or_else(|| DEFAULT_SYNTAX_SHELL.to_string()),
            banned_phrases: banned_phrases.unwrap_or_else(|| {
                DEFAULT_BANNED_PHRASES
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect()
            }),
            model_timeout: model_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_MODEL_TIMEOUT),
            syntax_timeout: syntax_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_SYNTAX_TIMEOUT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_toml(ConfigToml::default())
    }
}

fn default_history_file() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(DEFAULT_HISTORY_FILE),
        // No home directory: the reader treats a missing file as empty
        // context, so a relative fallback is harmless.
        None => PathBuf::from(DEFAULT_HISTORY_FILE),
    }
}
