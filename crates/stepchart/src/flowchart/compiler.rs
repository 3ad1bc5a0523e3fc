//! Recursive flowchart emission
//!
//! Walks a deserialized state machine in document order and emits Mermaid
//! flowchart text: one node (or subgraph) per state, edges per the
//! kind-specific transition policy, and end edges wiring outermost
//! terminal states to the shared `End` marker.

use tracing::{debug, span, warn, Level};

use crate::asl::{load_document, strip_tags, ChoiceRule, State, StateKind, StateMachine};
use crate::core::{CompileError, Direction, StyleClass};
use crate::flowchart::context::{Context, RegisteredState, ROOT_SCOPE};

/// Compiles state machine documents into Mermaid flowchart text
///
/// One instance owns one traversal [`Context`], reset at the start of
/// every [`compile`](FlowchartCompiler::compile) call. Instances are
/// cheap; use one per thread when compiling concurrently.
#[derive(Debug, Default)]
pub struct FlowchartCompiler {
    direction: Direction,
    context: Context,
}

impl FlowchartCompiler {
    /// Create a compiler with the default top-down direction
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compiler with a specific flow direction
    pub fn with_direction(direction: Direction) -> Self {
        Self {
            direction,
            context: Context::new(),
        }
    }

    /// The flow direction emitted in the flowchart header
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Compile a raw document into Mermaid flowchart text
    ///
    /// Returns `Ok(None)` when the document deserializes but lacks the
    /// minimum renderable shape (a `StartAt` and a non-empty `States`),
    /// and `Err` when the text is not structurally valid at all.
    pub fn compile(&mut self, input: &str) -> Result<Option<String>, CompileError> {
        let compile_span = span!(Level::INFO, "compile_flowchart", input_len = input.len());
        let _enter = compile_span.enter();

        self.context.reset();

        let stripped = strip_tags(input);
        let mut document = load_document(&stripped)?;

        if !document.has_minimum_shape() {
            warn!("Document deserialized but is not renderable");
            return Ok(None);
        }

        let body = emit_state_machine(&mut document, &mut self.context);
        debug!(
            end_edge_count = self.context.end_edges().len(),
            output_len = body.len(),
            "Traversal completed"
        );

        Ok(Some(self.assemble(&body)))
    }

    /// Wrap the traversal fragment with the header, style classes, and
    /// accumulated end edges
    fn assemble(&self, body: &str) -> String {
        let mut out = format!("flowchart {}\n", self.direction);
        for class in StyleClass::ALL {
            out.push_str(&class.class_def());
            out.push('\n');
        }
        out.push_str(body);
        for edge in self.context.end_edges() {
            out.push_str(edge);
            out.push('\n');
        }
        out
    }
}

/// Node identifier for a state, namespaced by its scope
///
/// Pure function of its inputs: the scope id, a separator, then the state
/// name with every character that is neither alphanumeric nor `_`
/// removed. States with equal names in different scopes never collide;
/// names that differ only in stripped characters do.
pub fn node_id(scope: &str, name: &str) -> String {
    let stripped: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    format!("{scope}-{stripped}")
}

/// Emit the text fragment for one machine's direct states and edges
///
/// Takes a fresh scope id before visiting any state, so nested machines
/// (Parallel branches, Map iterators) reached through [`emit_state`]
/// always allocate theirs after the enclosing machine's.
fn emit_state_machine(machine: &mut StateMachine, ctx: &mut Context) -> String {
    let scope = ctx.fresh_scope_id();
    let mut out = String::new();

    for (name, state) in machine.states.iter_mut() {
        state.id = scope.clone();
        state.name = name.clone();

        let node = node_id(&scope, name);
        let summary = RegisteredState {
            node_id: node.clone(),
            name: name.clone(),
            kind: state.kind.name(),
        };
        ctx.note_start_state(&summary);
        ctx.register(&scope, summary.clone());

        // Only outermost terminal states reach the shared End marker;
        // branch and iterator machines end inside their subgraph.
        if scope == ROOT_SCOPE && state.end {
            ctx.push_end_edge(format!("{node} --> End:::ended"));
            ctx.note_last_state(&summary);
        }

        out.push_str(&emit_state(state, &scope, ctx));

        if let Some(next) = &state.next {
            let target = node_id(&scope, next);
            match &state.kind {
                // Choice transitions are covered by the fan-out
                StateKind::Choice { .. } => {}
                StateKind::Wait {
                    seconds, timestamp, ..
                } => {
                    let label = wait_label(*seconds, timestamp.as_deref());
                    out.push_str(&format!("{node} --> |{label}| {target}\n"));
                }
                _ => {
                    out.push_str(&format!("{node} --> {target}\n"));
                }
            }
        }

        for catcher in &state.catchers {
            let target = node_id(&scope, &catcher.next);
            out.push_str(&format!("{node} --> {target}\n"));
        }
    }

    out
}

/// Emit the node or subgraph text for a single state
fn emit_state(state: &mut State, scope: &str, ctx: &mut Context) -> String {
    let node = node_id(scope, &state.name);
    let name = state.name.clone();

    match &mut state.kind {
        StateKind::Pass | StateKind::Task { .. } | StateKind::Wait { .. } => {
            format!("{node}[\"{name}\"]\n")
        }
        StateKind::Succeed => format!("{node}[\"{name}\"]:::succeed\n"),
        StateKind::Fail { .. } => format!("{node}[\"{name}\"]:::fail\n"),
        StateKind::Parallel { branches } => {
            let mut out = format!("subgraph {node}[\"Parallel: {name}\"]\ndirection TB\n");
            for branch in branches.iter_mut() {
                out.push_str(&emit_state_machine(branch, ctx));
            }
            out.push_str("end\n");
            out
        }
        StateKind::Map { iterator, .. } => {
            let mut out = format!("subgraph {node}[\"Map: {name}\"]\ndirection TB\n");
            out.push_str(&emit_state_machine(iterator, ctx));
            out.push_str("end\n");
            // Re-declared outside the subgraph so the id exists as an
            // edge endpoint in the enclosing scope.
            out.push_str(&format!("{node}\n"));
            out
        }
        StateKind::Choice { choices, default } => {
            emit_choice(&node, &name, scope, choices, default.as_deref())
        }
    }
}

/// Emit the decision fan-out of a Choice state
///
/// One edge per distinct target across all rules plus the default,
/// first-seen order, duplicates collapsed.
fn emit_choice(
    node: &str,
    name: &str,
    scope: &str,
    choices: &[ChoiceRule],
    default: Option<&str>,
) -> String {
    let mut targets: Vec<&str> = Vec::new();
    for rule in choices {
        if let Some(next) = rule.next.as_deref() {
            if !targets.contains(&next) {
                targets.push(next);
            }
        }
    }
    if let Some(default) = default {
        if !targets.contains(&default) {
            targets.push(default);
        }
    }

    let mut out = String::new();
    for target in targets {
        out.push_str(&format!(
            "{node}{{\"{name}\"}} --> {}[\"{target}\"]\n",
            node_id(scope, target)
        ));
    }
    out
}

/// Edge label for a Wait transition
///
/// Exactly one of the dialect's wait fields should be set; when neither
/// literal field is, the label falls back to a placeholder (path-based
/// waits land here too).
fn wait_label(seconds: Option<u64>, timestamp: Option<&str>) -> String {
    match (seconds, timestamp) {
        (Some(seconds), _) => format!("Waiting for {seconds}s"),
        (None, Some(timestamp)) => format!("Waiting until {timestamp}"),
        (None, None) => "Waiting for $variable".to_string(),
    }
}
