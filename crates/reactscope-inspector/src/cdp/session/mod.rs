//! CDP page session for interacting with a single page.

mod accessibility;
mod core;
mod js;
mod page;

pub use self::core::PageSession;
