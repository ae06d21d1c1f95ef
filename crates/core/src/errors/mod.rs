//! Error types and result extensions for scoped-use operations

mod builders;
mod conversions;
mod display;
mod extensions;
mod suppress;
mod types;

pub use extensions::*;
pub use suppress::{Suppress, Suppressing};
pub use types::{Error, Result};
