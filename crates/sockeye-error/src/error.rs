use crate::code::ErrorCode;
use crate::kind::ErrorKind;

/// The error value surfaced to embedders: a free-text diagnostic paired with
/// a registered [`ErrorKind`].
///
/// The diagnostic carries situational detail from the failure site and is
/// deliberately independent of the category's canonical text; `Display`
/// renders both halves. Construction performs no validation, no lookup
/// against the category table, and no I/O. The message is copied into the
/// value, so the error outlives whatever produced it and can cross thread
/// boundaries freely.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind}: {message}")]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error {
    /// Capture a diagnostic at the failure site.
    pub fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Error {
            message: message.into(),
            kind,
        }
    }

    /// The diagnostic text, verbatim as supplied at construction.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The registered failure kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The generic `(category, code)` pair for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::new(self.kind)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::new(message, ErrorKind::General)
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::new(message, ErrorKind::General)
    }
}

#[cfg(feature = "diagnostic")]
impl miette::Diagnostic for Error {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(format!("sockeye::{}", self.kind.as_str())))
    }
}
