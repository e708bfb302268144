//! Recency-windowed reader for the zsh history file.
//!
//! With EXTENDED_HISTORY enabled, zsh writes one line per command of the
//! form `: <start>:<elapsed>;<command>`. Only the command field matters
//! here; everything before the first `;` is metadata. Plain (non-extended)
//! lines carry no `;` and are skipped, as are histories written by other
//! shells.

use std::path::Path;

/// Returns the commands from the trailing `limit` lines of the history file
/// at `path`, in file order (oldest of the window first).
///
/// A missing or unreadable file is normal (fresh shell, different shell, no
/// history yet) and yields an empty vec rather than an error. Lines without
/// the `;` delimiter are skipped silently.
pub fn recent_commands(path: &Path, limit: usize) -> Vec<String> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!("no history context from {}: {e}", path.display());
            return Vec::new();
        }
    };

    // History files can contain raw multibyte sequences from interrupted
    // writes; decode lossily rather than dropping the whole window.
    let contents = String::from_utf8_lossy(&bytes);
    let lines: Vec<&str> = contents.lines().collect();
    let window_start = lines.len().saturating_sub(limit);

    lines[window_start..]
        .iter()
        .filter_map(|line| {
            line.split_once(';')
                .map(|(_metadata, command)| command.trim().to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_history(lines: &[String]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp history");
        for line in lines {
            writeln!(file, "{line}").expect("write history line");
        }
        file
    }

    #[test]
    fn missing_file_yields_empty_context() {
        let commands = recent_commands(Path::new("/nonexistent/path"), 30);
        assert_eq!(commands, Vec::<String>::new());
    }

    #[test]
    fn window_keeps_only_the_trailing_lines_in_order() {
        let lines: Vec<String> = (0..50)
            .map(|i| format!(": {}:0;echo {i}", 1700000000 + i))
            .collect();
        let file = write_history(&lines);

        let commands = recent_commands(file.path(), 30);
        assert_eq!(commands.len(), 30);
        assert_eq!(commands[0], "echo 20");
        assert_eq!(commands[29], "echo 49");
    }

    #[test]
    fn lines_without_delimiter_are_skipped() {
        let lines = vec![
            ": 1700000000:0;git status".to_string(),
            "plain history line".to_string(),
            ": 1700000001:0;cargo build".to_string(),
        ];
        let file = write_history(&lines);

        let commands = recent_commands(file.path(), 30);
        assert_eq!(commands, vec!["git status", "cargo build"]);
    }

    #[test]
    fn command_field_is_trimmed() {
        let lines = vec![": 1700000000:0;  ls -lah  ".to_string()];
        let file = write_history(&lines);

        let commands = recent_commands(file.path(), 30);
        assert_eq!(commands, vec!["ls -lah"]);
    }

    #[test]
    fn window_smaller_than_file_reads_everything() {
        let lines = vec![
            ": 1700000000:0;pwd".to_string(),
            ": 1700000001:0;whoami".to_string(),
        ];
        let file = write_history(&lines);

        let commands = recent_commands(file.path(), 30);
        assert_eq!(commands, vec!["pwd", "whoami"]);
    }
}
