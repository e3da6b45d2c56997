//! Glasspane utilities

pub mod error;

pub use error::*;
