//! Core types and errors for `scoped-use`.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias,
//!   plus the `Suppress` trait and the `Suppressing` composite that let a
//!   primary failure carry the close failures that followed it.
//! - **`close`**: The `Close` capability implemented by every resource that
//!   has a fallible release step.

pub mod close;
pub mod errors;

pub use self::{
    close::Close,
    errors::{Error, Result, ResultExt, Suppress, Suppressing},
};
