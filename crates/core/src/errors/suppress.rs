//! Recording secondary failures on a primary error

use super::types::Error;
use std::fmt;

/// An error that can carry secondary failures without giving up its identity.
///
/// `suppress` records `secondary` as additional context. The receiver stays
/// the primary failure: its kind and message are what callers match on.
pub trait Suppress<S = Self> {
    /// Record `secondary` on this error
    fn suppress(&mut self, secondary: S);
}

impl<S> Suppress<S> for Error
where
    S: Into<Error>,
{
    fn suppress(&mut self, secondary: S) {
        let secondary = secondary.into();
        match self {
            Error::Suppressed { suppressed, .. } => suppressed.push(secondary),
            _ => {
                let primary = std::mem::replace(
                    self,
                    Error::Operation {
                        message: String::new(),
                    },
                );
                *self = Error::Suppressed {
                    primary: Box::new(primary),
                    suppressed: vec![secondary],
                };
            }
        }
    }
}

/// Composite error for error types without a slot for suppressed failures.
///
/// Suppressed values are stored as-is, so the exact close error is handed
/// back by [`Suppressing::suppressed`].
#[derive(Debug)]
pub struct Suppressing<E> {
    primary: E,
    suppressed: Vec<E>,
}

impl<E> Suppressing<E> {
    /// Wrap a primary error with no suppressed errors
    #[must_use]
    pub fn new(primary: E) -> Self {
        Self {
            primary,
            suppressed: Vec::new(),
        }
    }

    /// Get the primary error
    pub fn primary(&self) -> &E {
        &self.primary
    }

    /// Get the suppressed errors in the order they were recorded
    pub fn suppressed(&self) -> &[E] {
        &self.suppressed
    }

    /// Discard the suppressed errors
    pub fn into_primary(self) -> E {
        self.primary
    }

    /// Split into the primary error and the suppressed ones
    pub fn into_parts(self) -> (E, Vec<E>) {
        (self.primary, self.suppressed)
    }
}

impl<E> From<E> for Suppressing<E> {
    fn from(primary: E) -> Self {
        Self::new(primary)
    }
}

impl<E> Suppress<E> for Suppressing<E> {
    fn suppress(&mut self, secondary: E) {
        self.suppressed.push(secondary);
    }
}

impl<E: fmt::Display> fmt::Display for Suppressing<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)?;
        for err in &self.suppressed {
            write!(f, " (suppressed: {err})")?;
        }
        Ok(())
    }
}

impl<E> std::error::Error for Suppressing<E>
where
    E: std::error::Error,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.primary.source()
    }
}
