use std::fmt;

/// Outcome of a mutating operation against the repository.
///
/// The message is always human-readable: a success description or an
/// already-normalized error line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
}

impl Outcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Message as shown in a status line: failures carry an `Error: ` prefix.
    pub fn status_line(&self) -> String {
        if self.success {
            self.message.clone()
        } else {
            format!("Error: {}", self.message)
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl<E: std::error::Error> From<Result<String, E>> for Outcome {
    fn from(result: Result<String, E>) -> Self {
        match result {
            Ok(message) => Outcome::ok(message),
            Err(e) => Outcome::failed(e.to_string()),
        }
    }
}
