//! # reactscope config
//!
//! Configuration for the inspector: CDP endpoint, traversal and serialization
//! limits, and logging.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
