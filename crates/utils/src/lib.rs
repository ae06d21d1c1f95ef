//! Scoped use of closable resources
//!
//! This crate provides `using`, which runs an operation on a resource and
//! guarantees the resource is closed afterward, together with the guards it
//! is built on and the logging setup for the events it emits.

pub mod cleanup;
pub mod logging;

pub use cleanup::*;
