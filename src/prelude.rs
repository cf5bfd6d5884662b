//! Prelude module for the japanese_chrono crate.
//!
//! Re-exports commonly used derive macros from derive_more.

pub use derive_more::Display;
