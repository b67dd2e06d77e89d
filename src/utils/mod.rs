//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `template` - String template rendering
//! - `validation` - Input validation helpers

pub mod io;
pub(crate) mod template;
pub mod validation;
