//! Tool protocol definitions.
//!
//! Every public inspection operation is exposed as a tool.

mod context;
mod definition;
mod registry;
mod result;
mod traits;

pub use context::*;
pub use definition::*;
pub use registry::*;
pub use result::*;
pub use traits::*;
