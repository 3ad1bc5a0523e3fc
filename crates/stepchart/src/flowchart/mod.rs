//! Flowchart compilation
//!
//! The traversal context and the recursive compiler that turns a
//! state machine document into Mermaid flowchart text.

mod compiler;
mod context;

pub use compiler::*;
pub use context::*;
