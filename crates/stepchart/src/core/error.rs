//! Error types for state machine compilation
//!
//! A document either fails to deserialize (`MalformedDocument`) or parses
//! but lacks the minimum renderable shape, which is reported as an absent
//! result rather than an error.

use thiserror::Error;

/// Errors produced while turning a state machine document into a flowchart
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("malformed document: {source}")]
    MalformedDocument {
        #[from]
        source: serde_yaml::Error,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
