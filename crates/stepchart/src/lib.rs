//! Stepchart - Convert Amazon States Language to Mermaid flowcharts
//!
//! A library for parsing Amazon States Language (ASL) state machine
//! documents, in JSON or YAML, and compiling them into Mermaid flowchart
//! text.
//!
//! # Quick Start
//!
//! ```rust
//! use stepchart::compile;
//!
//! let input = r#"{"StartAt": "A", "States": {"A": {"Type": "Pass", "End": true}}}"#;
//! let mermaid = compile(input).unwrap().expect("renderable document");
//! assert!(mermaid.starts_with("flowchart TB"));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the compiler directly:
//!
//! ```rust
//! use stepchart::prelude::*;
//!
//! let input = r#"{"StartAt": "A", "States": {"A": {"Type": "Succeed", "End": true}}}"#;
//!
//! let mut compiler = FlowchartCompiler::with_direction(Direction::LeftRight);
//! let mermaid = compiler.compile(input).unwrap().expect("renderable document");
//! assert!(mermaid.starts_with("flowchart LR"));
//! assert!(mermaid.contains(":::succeed"));
//! ```

pub mod asl;
pub mod core;
pub mod flowchart;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::asl::{Catcher, ChoiceRule, Retrier, State, StateKind, StateMachine};
    pub use crate::core::{CompileError, Direction, StyleClass};
    pub use crate::flowchart::{Context, FlowchartCompiler};
}

/// Compile an ASL document to Mermaid flowchart text
///
/// This is the simplest way to turn a state machine document into a
/// diagram. Accepts JSON or YAML.
///
/// # Returns
/// * `Ok(Some(String))` - the Mermaid flowchart text
/// * `Ok(None)` - the document parsed but has nothing renderable
///   (missing `StartAt` or empty `States`)
/// * `Err` - the document is not structurally valid
///
/// # Example
/// ```rust
/// use stepchart::compile;
///
/// let mermaid = compile("StartAt: A\nStates:\n  A:\n    Type: Pass\n    End: true\n")
///     .unwrap()
///     .expect("renderable document");
/// assert!(mermaid.contains("scope0-A"));
/// ```
pub fn compile(input: &str) -> Result<Option<String>, CompileError> {
    flowchart::FlowchartCompiler::new().compile(input)
}

/// Compile with a specific flow direction
///
/// # Example
/// ```rust
/// use stepchart::{compile_with_direction, Direction};
///
/// let input = r#"{"StartAt": "A", "States": {"A": {"Type": "Pass", "End": true}}}"#;
/// let mermaid = compile_with_direction(input, Direction::LeftRight)
///     .unwrap()
///     .expect("renderable document");
/// assert!(mermaid.starts_with("flowchart LR"));
/// ```
pub fn compile_with_direction(
    input: &str,
    direction: Direction,
) -> Result<Option<String>, CompileError> {
    flowchart::FlowchartCompiler::with_direction(direction).compile(input)
}

/// Parse an ASL document into its model without compiling
///
/// Useful when the caller needs to inspect the document itself. Shorthand
/// tags are stripped first, as in [`compile`].
///
/// # Example
/// ```rust
/// use stepchart::load;
///
/// let document = load(r#"{"StartAt": "A", "States": {"A": {"Type": "Pass"}}}"#).unwrap();
/// assert!(document.has_minimum_shape());
/// ```
pub fn load(input: &str) -> Result<asl::StateMachine, CompileError> {
    let stripped = asl::strip_tags(input);
    asl::load_document(&stripped)
}
