//! Traversal context for flowchart compilation
//!
//! One context lives inside each compiler and is reset at the start of
//! every compile. It hands out scope identifiers, remembers which states
//! were seen, and accumulates the edges that wire outermost terminal
//! states to the shared `End` marker.

use std::collections::HashMap;

/// Scope identifier of the outermost state machine
pub const ROOT_SCOPE: &str = "scope0";

/// Summary of a state registered during traversal
///
/// Kept for diagnostics; the emitted text never reads it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredState {
    /// Generated node identifier
    pub node_id: String,
    /// State name as written in the document
    pub name: String,
    /// Dialect type name
    pub kind: &'static str,
}

/// Mutable traversal state threaded through the recursive walk
#[derive(Debug, Default)]
pub struct Context {
    depth: usize,
    states: HashMap<String, RegisteredState>,
    start_state: Option<RegisteredState>,
    last_state: Option<RegisteredState>,
    end_edges: Vec<String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the next scope identifier and advance the counter
    ///
    /// Called exactly once per state machine, before any of its states
    /// are visited; the outermost machine always receives [`ROOT_SCOPE`].
    pub fn fresh_scope_id(&mut self) -> String {
        let id = format!("scope{}", self.depth);
        self.depth += 1;
        id
    }

    /// Record a state under its scope; the most recent registration per
    /// scope wins
    pub fn register(&mut self, scope: &str, state: RegisteredState) {
        self.states.insert(scope.to_string(), state);
    }

    /// Most recently registered state of the given scope
    pub fn registered(&self, scope: &str) -> Option<&RegisteredState> {
        self.states.get(scope)
    }

    /// Record the first state seen across the whole traversal; later
    /// calls are ignored
    pub fn note_start_state(&mut self, state: &RegisteredState) {
        if self.start_state.is_none() {
            self.start_state = Some(state.clone());
        }
    }

    /// Record the most recent outermost-scope terminal state; each call
    /// overwrites the previous one
    pub fn note_last_state(&mut self, state: &RegisteredState) {
        self.last_state = Some(state.clone());
    }

    pub fn start_state(&self) -> Option<&RegisteredState> {
        self.start_state.as_ref()
    }

    pub fn last_state(&self) -> Option<&RegisteredState> {
        self.last_state.as_ref()
    }

    /// Append an edge fragment wiring a terminal state to the shared
    /// `End` marker
    pub fn push_end_edge(&mut self, edge: String) {
        self.end_edges.push(edge);
    }

    /// Accumulated end edges, in recording order
    pub fn end_edges(&self) -> &[String] {
        &self.end_edges
    }

    /// Discard all traversal state from a previous compile
    pub fn reset(&mut self) {
        self.depth = 0;
        self.states.clear();
        self.start_state = None;
        self.last_state = None;
        self.end_edges.clear();
    }
}
