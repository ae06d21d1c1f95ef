//! Builder methods for creating errors with context

use super::types::Error;

impl Error {
    /// Create an I/O error tagged with the operation that raised it
    #[must_use]
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create a close error
    #[must_use]
    pub fn close(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Close {
            resource: resource.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a close error with a source error
    #[must_use]
    pub fn close_with_source(
        resource: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Close {
            resource: resource.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create an operation error
    #[must_use]
    pub fn operation(message: impl Into<String>) -> Self {
        Error::Operation {
            message: message.into(),
        }
    }

    /// The error that caused the failure, ignoring any suppressed close errors
    #[must_use]
    pub fn primary(&self) -> &Error {
        match self {
            Error::Suppressed { primary, .. } => primary,
            other => other,
        }
    }

    /// Close errors recorded on this error after it was raised
    #[must_use]
    pub fn suppressed(&self) -> &[Error] {
        match self {
            Error::Suppressed { suppressed, .. } => suppressed,
            _ => &[],
        }
    }

    /// Check whether any close error was suppressed onto this error
    #[must_use]
    pub fn has_suppressed(&self) -> bool {
        !self.suppressed().is_empty()
    }

    /// Drop the suppressed errors and return the primary one
    #[must_use]
    pub fn into_primary(self) -> Error {
        match self {
            Error::Suppressed { primary, .. } => *primary,
            other => other,
        }
    }
}
