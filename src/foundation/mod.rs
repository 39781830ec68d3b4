//! Shared primitives: errors, colors, dimensions.

pub mod core;
pub mod error;
