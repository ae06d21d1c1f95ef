//! Run an operation on a closable resource and always close it.
//!
//! [`using`] hands a resource to an operation and closes it exactly once on
//! every exit path. When both the operation and the close fail, the
//! operation error is returned with the close error recorded on it as a
//! suppressed cause.
//!
//! ```
//! use scoped_use::{using, ResultExt};
//! use std::io::Write;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("report.txt");
//!
//! let written: scoped_use::Result<usize> =
//!     using(std::fs::File::create(&path).unwrap(), |file| {
//!         file.write_all(b"ok").context("writing report")?;
//!         Ok(2)
//!     });
//! assert_eq!(written.unwrap(), 2);
//! ```

pub use scoped_use_core::{close, errors, Close, Error, Result, ResultExt, Suppress, Suppressing};
pub use scoped_use_utils::{cleanup, closing, logging, using, CloseGuard, Closing, UseExt};
