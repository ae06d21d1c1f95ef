//! The closable-resource capability

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::net::{Shutdown, TcpStream};

/// A resource that must be released explicitly, and whose release may fail.
///
/// `close` consumes the resource, so a closed value cannot be closed again.
/// Dropping a resource without closing it releases it silently, which loses
/// any error the release would have reported.
pub trait Close {
    /// Error reported when releasing the resource fails
    type Error;

    /// Release the resource
    fn close(self) -> Result<(), Self::Error>;
}

/// An absent resource closes as a no-op.
impl<C: Close> Close for Option<C> {
    type Error = C::Error;

    fn close(self) -> Result<(), Self::Error> {
        match self {
            Some(resource) => resource.close(),
            None => Ok(()),
        }
    }
}

impl<C: Close> Close for Box<C> {
    type Error = C::Error;

    fn close(self) -> Result<(), Self::Error> {
        (*self).close()
    }
}

/// Flushes file contents and metadata to disk before the handle is dropped.
impl Close for File {
    type Error = io::Error;

    fn close(self) -> Result<(), Self::Error> {
        self.sync_all()
    }
}

/// Flushes buffered data. The inner writer is dropped, not closed.
impl<W: Write> Close for BufWriter<W> {
    type Error = io::Error;

    fn close(self) -> Result<(), Self::Error> {
        self.into_inner()
            .map(drop)
            .map_err(io::IntoInnerError::into_error)
    }
}

impl Close for TcpStream {
    type Error = io::Error;

    fn close(self) -> Result<(), Self::Error> {
        match self.shutdown(Shutdown::Both) {
            Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
            other => other,
        }
    }
}
