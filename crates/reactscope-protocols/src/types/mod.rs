//! Common types shared across the tool boundary.

mod common;

pub use common::*;
