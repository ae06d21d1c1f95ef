//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { operation, source } => {
                write!(f, "I/O error during {operation}: {source}")
            }
            Error::Close {
                resource, message, ..
            } => {
                write!(f, "failed to close {resource}: {message}")
            }
            Error::Operation { message } => {
                write!(f, "operation failed: {message}")
            }
            Error::Suppressed {
                primary,
                suppressed,
            } => {
                write!(f, "{primary}")?;
                match suppressed.as_slice() {
                    [] => Ok(()),
                    [only] => write!(f, " (suppressed: {only})"),
                    many => {
                        write!(f, " (suppressed {} errors: ", many.len())?;
                        for (i, err) in many.iter().enumerate() {
                            if i > 0 {
                                write!(f, "; ")?;
                            }
                            write!(f, "{err}")?;
                        }
                        write!(f, ")")
                    }
                }
            }
        }
    }
}
