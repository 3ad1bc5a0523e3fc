//! Deserialization boundary for state machine documents
//!
//! YAML is a superset of JSON, so a single deserializer accepts both
//! input syntaxes. A document that deserializes is not necessarily
//! renderable; see [`StateMachine::has_minimum_shape`].

use tracing::debug;

use crate::asl::model::StateMachine;
use crate::core::CompileError;

/// Deserialize a raw document (JSON or YAML) into a [`StateMachine`]
///
/// Fails with [`CompileError::MalformedDocument`] when the text is not
/// structurally valid. Dangling state references are not checked here:
/// the compiler renders them as edges to undeclared identifiers.
pub fn load_document(text: &str) -> Result<StateMachine, CompileError> {
    let document: StateMachine = serde_yaml::from_str(text)?;
    debug!(
        state_count = document.states.len(),
        has_start_at = document.start_at.is_some(),
        "Document deserialized"
    );
    Ok(document)
}
