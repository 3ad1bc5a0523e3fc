//! Amazon States Language document handling
//!
//! The document model, the deserialization boundary, and shorthand-tag
//! stripping.

mod loader;
mod model;
mod tags;

pub use loader::*;
pub use model::*;
pub use tags::*;
