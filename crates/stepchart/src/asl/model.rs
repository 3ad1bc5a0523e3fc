//! Document model for Amazon States Language state machines
//!
//! Pure data, deserialized from JSON or YAML documents. A state machine
//! appears at the document root and, recursively, inside every Parallel
//! branch and Map iterator. The `states` mapping keeps document order,
//! which drives the order nodes and edges are emitted in.
//!
//! The compiler stamps `id` and `name` onto each state when it first
//! visits it; neither field is part of the external document.

use indexmap::IndexMap;
use serde::Deserialize;

/// A state machine: an entry point plus a named set of states
///
/// `start_at` is optional at the type level so that a document missing it
/// still deserializes; [`StateMachine::has_minimum_shape`] is the
/// renderability check callers consult afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StateMachine {
    pub start_at: Option<String>,
    #[serde(default)]
    pub states: IndexMap<String, State>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl StateMachine {
    /// Minimum shape required to draw a graph: an entry point and at
    /// least one state. Anything deeper (dangling `Next` targets, missing
    /// branch content) is rendered best-effort, never rejected.
    pub fn has_minimum_shape(&self) -> bool {
        self.start_at.is_some() && !self.states.is_empty()
    }
}

/// A single state
///
/// Common dialect fields plus the kind-specific payload. `id` holds the
/// scope identifier of the enclosing machine and `name` the key this
/// state was registered under; both are filled in during traversal.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct State {
    #[serde(skip)]
    pub id: String,
    #[serde(skip)]
    pub name: String,
    pub next: Option<String>,
    #[serde(default)]
    pub end: bool,
    #[serde(default, rename = "Catch")]
    pub catchers: Vec<Catcher>,
    #[serde(default, rename = "Retry")]
    pub retriers: Vec<Retrier>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub kind: StateKind,
}

impl State {
    /// Whether this state ends its enclosing machine
    pub fn is_terminal(&self) -> bool {
        self.end
    }
}

/// Kind-specific state payload, discriminated by the `Type` field
///
/// A closed union: a document using a state type not listed here fails to
/// deserialize instead of silently producing an unrenderable state.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "Type", rename_all_fields = "PascalCase")]
pub enum StateKind {
    Pass,
    Task {
        resource: Option<String>,
    },
    Choice {
        #[serde(default)]
        choices: Vec<ChoiceRule>,
        default: Option<String>,
    },
    Wait {
        seconds: Option<u64>,
        timestamp: Option<String>,
        seconds_path: Option<String>,
        timestamp_path: Option<String>,
    },
    Succeed,
    Fail {
        error: Option<String>,
        cause: Option<String>,
    },
    Parallel {
        branches: Vec<StateMachine>,
    },
    Map {
        iterator: StateMachine,
        max_concurrency: Option<u64>,
    },
}

impl StateKind {
    /// The dialect name of this kind, as it appears in the `Type` field
    pub fn name(&self) -> &'static str {
        match self {
            StateKind::Pass => "Pass",
            StateKind::Task { .. } => "Task",
            StateKind::Choice { .. } => "Choice",
            StateKind::Wait { .. } => "Wait",
            StateKind::Succeed => "Succeed",
            StateKind::Fail { .. } => "Fail",
            StateKind::Parallel { .. } => "Parallel",
            StateKind::Map { .. } => "Map",
        }
    }

    /// All dialect type names, in dialect documentation order
    pub fn names() -> &'static [&'static str] {
        &[
            "Pass", "Task", "Choice", "Wait", "Succeed", "Fail", "Parallel", "Map",
        ]
    }
}

/// One rule of a Choice state
///
/// The rule's condition does not affect graph shape, so only the target
/// is modeled. A rule without a target contributes nothing to the
/// fan-out.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChoiceRule {
    pub next: Option<String>,
}

/// An error catcher attached to a state
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Catcher {
    #[serde(default)]
    pub error_equals: Vec<String>,
    pub next: String,
    #[serde(default)]
    pub result_path: Option<String>,
}

/// A retry policy attached to a state
///
/// Carried as data only; retries never influence the emitted graph.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Retrier {
    #[serde(default)]
    pub error_equals: Vec<String>,
    #[serde(default)]
    pub interval_seconds: Option<u64>,
    #[serde(default)]
    pub max_attempts: Option<u64>,
    #[serde(default)]
    pub backoff_rate: Option<f64>,
}
