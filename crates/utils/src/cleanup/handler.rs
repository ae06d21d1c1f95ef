//! RAII guards and adapters for closable resources
//!
//! `CloseGuard` keeps a resource closed on every exit path, including panics.
//! `Closing` turns any value plus a release function into a `Close` resource.

use scoped_use_core::Close;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// RAII guard that closes its resource if dropped while still armed
pub struct CloseGuard<R>
where
    R: Close,
    R::Error: fmt::Debug,
{
    resource: Option<R>,
}

impl<R> CloseGuard<R>
where
    R: Close,
    R::Error: fmt::Debug,
{
    /// Create an armed guard owning `resource`
    pub fn new(resource: R) -> Self {
        Self {
            resource: Some(resource),
        }
    }

    /// Borrow the guarded resource
    pub fn resource(&self) -> &R {
        match self.resource.as_ref() {
            Some(resource) => resource,
            None => unreachable!("resource is only taken by disarm or drop"),
        }
    }

    /// Mutably borrow the guarded resource
    pub fn resource_mut(&mut self) -> &mut R {
        match self.resource.as_mut() {
            Some(resource) => resource,
            None => unreachable!("resource is only taken by disarm or drop"),
        }
    }

    /// Hand the resource back without closing it
    pub fn disarm(mut self) -> R {
        match self.resource.take() {
            Some(resource) => resource,
            None => unreachable!("resource is only taken by disarm or drop"),
        }
    }
}

impl<R> Drop for CloseGuard<R>
where
    R: Close,
    R::Error: fmt::Debug,
{
    fn drop(&mut self) {
        if let Some(resource) = self.resource.take() {
            let unwinding = std::thread::panicking();
            match resource.close() {
                Ok(()) => tracing::trace!(unwinding, "Closed guarded resource on drop"),
                Err(e) => {
                    tracing::warn!(unwinding, error = ?e, "Failed to close guarded resource on drop")
                }
            }
        }
    }
}

impl<R> fmt::Debug for CloseGuard<R>
where
    R: Close + fmt::Debug,
    R::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloseGuard")
            .field("resource", &self.resource)
            .finish()
    }
}

/// A value paired with the function that releases it
pub struct Closing<T, F> {
    value: T,
    closer: F,
}

/// Make `value` closable by pairing it with `closer`
///
/// ```
/// use scoped_use_core::Close;
/// use scoped_use_utils::closing;
///
/// let log = closing(Vec::<String>::new(), |lines| {
///     if lines.is_empty() {
///         Err("nothing was logged")
///     } else {
///         Ok(())
///     }
/// });
/// assert_eq!(log.close(), Err("nothing was logged"));
/// ```
pub fn closing<T, F, E>(value: T, closer: F) -> Closing<T, F>
where
    F: FnOnce(T) -> Result<(), E>,
{
    Closing { value, closer }
}

impl<T, F> Closing<T, F> {
    /// Get the wrapped value
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Get the wrapped value mutably
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Take the value back without running the closer
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, F, E> Close for Closing<T, F>
where
    F: FnOnce(T) -> Result<(), E>,
{
    type Error = E;

    fn close(self) -> Result<(), Self::Error> {
        (self.closer)(self.value)
    }
}

impl<T, F> Deref for Closing<T, F> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, F> DerefMut for Closing<T, F> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Closing<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closing")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
