//! Scoped resource use with guaranteed cleanup.
//!
//! ## Key Components
//!
//! - **`scoped_use`**: `using` and its method form `UseExt::use_with`, which
//!   run an operation on a resource and close the resource on every exit path.
//! - **`handler`**: The `CloseGuard` RAII guard and the `Closing` adapter.

pub mod handler;
pub mod scoped_use;

pub use handler::{closing, CloseGuard, Closing};
pub use scoped_use::{using, UseExt};
