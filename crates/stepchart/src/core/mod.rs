//! Core building blocks shared by the document model and the compiler
//!
//! Error taxonomy, flowchart primitives (direction, style classes), and
//! the tracing-based logging setup.

mod error;
pub mod logging;
mod types;

pub use error::*;
pub use types::*;
