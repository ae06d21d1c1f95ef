//! Core error type definitions

/// Result type alias for scoped-use operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for scoped-use operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O failure raised by an operation or by closing a resource
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Closing a resource failed
    Close {
        resource: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The caller-supplied operation failed
    Operation { message: String },

    /// A primary failure carrying the close failures that happened after it
    Suppressed {
        primary: Box<Error>,
        suppressed: Vec<Error>,
    },
}
