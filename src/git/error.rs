//! Git error type and message normalization

use std::io;

/// Failure of a git invocation or of a filesystem step performed on its behalf.
///
/// `Display` is always suitable for showing to the user as-is.
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("{command} timed out after {secs}s")]
    Timeout { command: String, secs: u64 },

    #[error("{message}")]
    Failed { message: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl GitError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        GitError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Reduce git's stderr to the single line worth showing.
///
/// Prefers the first `fatal:` line, then the first `error:` line (both with
/// the prefix stripped), then the last non-empty line, which skips progress
/// noise printed before the actual complaint.
pub fn normalize_git_error(stderr: &str) -> String {
    let lines: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if let Some(fatal) = lines.iter().find(|l| l.starts_with("fatal:")) {
        return fatal.trim_start_matches("fatal:").trim_start().to_string();
    }
    if let Some(error) = lines.iter().find(|l| l.starts_with("error:")) {
        return error.trim_start_matches("error:").trim_start().to_string();
    }

    lines
        .last()
        .map(|l| l.to_string())
        .unwrap_or_else(|| "Unknown error".to_string())
}
