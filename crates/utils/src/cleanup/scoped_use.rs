//! Run an operation on a resource and close it on every exit path

use super::handler::CloseGuard;
use scoped_use_core::{Close, Suppress};
use std::fmt;

/// Run `operation` on `resource`, then close `resource` exactly once.
///
/// - The operation succeeds and close succeeds: its value is returned.
/// - The operation succeeds and close fails: the close error is returned and
///   the value is discarded.
/// - The operation fails: the resource is still closed. A close failure is
///   recorded on the operation error through [`Suppress`], and the operation
///   error is returned.
/// - The operation panics: the resource is closed while unwinding and a close
///   failure is logged.
///
/// An absent resource (`None`) is handed to the operation as-is and never
/// closed.
///
/// ```
/// use scoped_use_core::Suppressing;
/// use scoped_use_utils::using;
/// use std::io::{self, BufWriter, Write};
///
/// let written: Result<usize, Suppressing<io::Error>> =
///     using(BufWriter::new(Vec::new()), |out| {
///         out.write_all(b"hello")?;
///         Ok(5)
///     });
/// assert_eq!(written.unwrap(), 5);
/// ```
pub fn using<R, T, E, F>(resource: R, operation: F) -> Result<T, E>
where
    R: Close,
    R::Error: fmt::Debug,
    E: From<R::Error> + Suppress<R::Error>,
    F: FnOnce(&mut R) -> Result<T, E>,
{
    let mut guard = CloseGuard::new(resource);
    let outcome = operation(guard.resource_mut());
    let resource = guard.disarm();

    match outcome {
        Ok(value) => match resource.close() {
            Ok(()) => {
                tracing::trace!("Closed resource after successful operation");
                Ok(value)
            }
            Err(e) => {
                tracing::debug!(error = ?e, "Failed to close resource after successful operation");
                Err(E::from(e))
            }
        },
        Err(mut error) => {
            close_and_suppress(resource, &mut error);
            Err(error)
        }
    }
}

/// Close `resource`, recording a close failure on `primary` instead of
/// returning it.
pub(crate) fn close_and_suppress<R, E>(resource: R, primary: &mut E)
where
    R: Close,
    R::Error: fmt::Debug,
    E: Suppress<R::Error>,
{
    match resource.close() {
        Ok(()) => tracing::trace!("Closed resource after failed operation"),
        Err(e) => {
            tracing::debug!(error = ?e, "Suppressing close failure onto operation error");
            primary.suppress(e);
        }
    }
}

/// Method form of [`using`] for every closable resource
pub trait UseExt: Close + Sized {
    /// Run `operation` on `self`, then close `self`; see [`using`]
    fn use_with<T, E, F>(self, operation: F) -> Result<T, E>
    where
        Self::Error: fmt::Debug,
        E: From<Self::Error> + Suppress<Self::Error>,
        F: FnOnce(&mut Self) -> Result<T, E>,
    {
        using(self, operation)
    }
}

impl<R: Close> UseExt for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_use_core::{Error, Suppressing};
    use std::cell::Cell;
    use std::io::{self, Write};
    use std::rc::Rc;

    /// In-memory buffer whose close can be made to fail
    struct MemoryBuffer {
        data: Vec<u8>,
        close_error: Option<io::Error>,
        closes: Rc<Cell<usize>>,
    }

    impl MemoryBuffer {
        fn new(closes: &Rc<Cell<usize>>) -> Self {
            Self {
                data: Vec::new(),
                close_error: None,
                closes: Rc::clone(closes),
            }
        }

        fn failing_close(closes: &Rc<Cell<usize>>, message: &str) -> Self {
            Self {
                close_error: Some(io::Error::new(io::ErrorKind::Other, message.to_string())),
                ..Self::new(closes)
            }
        }
    }

    impl Close for MemoryBuffer {
        type Error = io::Error;

        fn close(self) -> Result<(), Self::Error> {
            self.closes.set(self.closes.get() + 1);
            match self.close_error {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }
    }

    fn bad_data() -> io::Error {
        io::Error::new(io::ErrorKind::InvalidData, "bad data")
    }

    #[test]
    fn test_success_returns_value_and_closes_once() {
        let closes = Rc::new(Cell::new(0));

        let result: Result<i32, Suppressing<io::Error>> =
            using(MemoryBuffer::new(&closes), |buf| {
                buf.data.write_all(b"payload")?;
                Ok(42)
            });

        assert_eq!(result.unwrap(), 42);
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_close_failure_replaces_result() {
        let closes = Rc::new(Cell::new(0));

        let result: Result<i32, Suppressing<io::Error>> =
            using(MemoryBuffer::failing_close(&closes, "disk full"), |buf| {
                buf.data.extend_from_slice(b"payload");
                Ok(42)
            });

        let err = result.unwrap_err();
        assert_eq!(err.primary().to_string(), "disk full");
        assert!(err.suppressed().is_empty());
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_operation_failure_without_close_failure() {
        let closes = Rc::new(Cell::new(0));

        let result: Result<i32, Suppressing<io::Error>> =
            using(MemoryBuffer::new(&closes), |_| Err(bad_data().into()));

        let err = result.unwrap_err();
        assert_eq!(err.primary().kind(), io::ErrorKind::InvalidData);
        assert!(err.suppressed().is_empty());
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_double_failure_keeps_operation_error_primary() {
        let closes = Rc::new(Cell::new(0));

        let result: Result<i32, Suppressing<io::Error>> =
            using(MemoryBuffer::failing_close(&closes, "disk full"), |_| {
                Err(bad_data().into())
            });

        let err = result.unwrap_err();
        assert_eq!(err.primary().to_string(), "bad data");
        assert_eq!(err.suppressed().len(), 1);
        assert_eq!(err.suppressed()[0].to_string(), "disk full");
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_absent_resource_is_not_closed() {
        let resource: Option<MemoryBuffer> = None;

        let result: Result<&str, Suppressing<io::Error>> = using(resource, |buf| {
            assert!(buf.is_none());
            Ok("ran")
        });
        assert_eq!(result.unwrap(), "ran");

        let resource: Option<MemoryBuffer> = None;
        let result: Result<(), Suppressing<io::Error>> =
            using(resource, |_| Err(bad_data().into()));
        let err = result.unwrap_err();
        assert_eq!(err.primary().kind(), io::ErrorKind::InvalidData);
        assert!(err.suppressed().is_empty());
    }

    #[test]
    fn test_present_optional_resource_is_closed() {
        let closes = Rc::new(Cell::new(0));

        let result: Result<(), Suppressing<io::Error>> =
            using(Some(MemoryBuffer::new(&closes)), |buf| {
                assert!(buf.is_some());
                Ok(())
            });

        assert!(result.is_ok());
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_close_and_suppress_success_leaves_primary_untouched() {
        let closes = Rc::new(Cell::new(0));
        let mut primary = Suppressing::from(bad_data());

        close_and_suppress(MemoryBuffer::new(&closes), &mut primary);

        assert!(primary.suppressed().is_empty());
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_close_and_suppress_records_failure() {
        let closes = Rc::new(Cell::new(0));
        let mut primary = Error::operation("bad data");

        close_and_suppress(
            MemoryBuffer::failing_close(&closes, "disk full"),
            &mut primary,
        );

        assert_eq!(primary.primary().to_string(), "operation failed: bad data");
        assert_eq!(primary.suppressed().len(), 1);
        assert!(matches!(&primary.suppressed()[0], Error::Io { source, .. } if source.to_string() == "disk full"));
    }

    #[test]
    fn test_core_error_close_failure_after_success() {
        let closes = Rc::new(Cell::new(0));

        let result: scoped_use_core::Result<i32> =
            using(MemoryBuffer::failing_close(&closes, "disk full"), |_| Ok(42));

        let err = result.unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(!err.has_suppressed());
    }

    #[test]
    fn test_use_with_method_form() {
        let closes = Rc::new(Cell::new(0));

        let result: Result<usize, Suppressing<io::Error>> =
            MemoryBuffer::new(&closes).use_with(|buf| {
                buf.data.extend_from_slice(b"abc");
                Ok(buf.data.len())
            });

        assert_eq!(result.unwrap(), 3);
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_panicking_operation_still_closes() {
        let closes = Rc::new(Cell::new(0));
        let resource = MemoryBuffer::failing_close(&closes, "disk full");

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _: Result<(), Suppressing<io::Error>> =
                using(resource, |_| panic!("Simulated error"));
        }));

        assert!(result.is_err());
        assert_eq!(closes.get(), 1);
    }
}
