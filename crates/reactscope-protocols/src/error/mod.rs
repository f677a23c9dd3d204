//! Error types for the tool boundary.

mod tool;

pub use tool::*;
