//! Extension traits for error handling

use super::types::{Error, Result};

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a lazy message
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| wrap(message.into(), e.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| wrap(f(), e.into()))
    }
}

// Suppressed close errors stay attached to the outer error.
fn wrap(message: String, error: Error) -> Error {
    match error {
        Error::Suppressed {
            primary,
            suppressed,
        } => Error::Suppressed {
            primary: Box::new(Error::Operation {
                message: format!("{message}: {primary}"),
            }),
            suppressed,
        },
        other => Error::Operation {
            message: format!("{message}: {other}"),
        },
    }
}
