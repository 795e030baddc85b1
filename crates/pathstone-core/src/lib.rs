//! Pathstone Core - Foundational types for Pathstone
//!
//! This crate provides the error type and `Result` alias that the other
//! Pathstone crates depend on.

mod error;

pub use error::{PathstoneError, Result};
