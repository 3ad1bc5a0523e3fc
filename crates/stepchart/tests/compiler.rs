//! End-to-end compiler tests over whole documents

use stepchart::flowchart::FlowchartCompiler;
use stepchart::{compile, compile_with_direction, Direction};

fn compile_ok(input: &str) -> String {
    compile(input).expect("compile").expect("renderable")
}

#[test]
fn pass_then_succeed_full_output() {
    let input = r#"{"StartAt": "A", "States": {
        "A": {"Type": "Pass", "Next": "B"},
        "B": {"Type": "Succeed", "End": true}}}"#;

    let expected = "\
flowchart TB
classDef started fill:#008855, color:#fff;
classDef ended fill:#000099, color:#fff;
classDef succeed fill:#006600, color:#fff;
classDef fail fill:#880000, color:#fff;
scope0-A[\"A\"]
scope0-A --> scope0-B
scope0-B[\"B\"]:::succeed
scope0-B --> End:::ended
";

    assert_eq!(compile_ok(input), expected);
}

#[test]
fn renderable_document_never_returns_sentinel() {
    let input = r#"{"StartAt": "Only", "States": {"Only": {"Type": "Pass", "End": true}}}"#;
    assert!(compile(input).unwrap().is_some());
}

#[test]
fn sentinel_for_missing_start_at_and_empty_states() {
    assert!(compile(r#"{"States": {"A": {"Type": "Pass"}}}"#)
        .unwrap()
        .is_none());
    assert!(compile(r#"{"StartAt": "A", "States": {}}"#)
        .unwrap()
        .is_none());
    assert!(compile(r#"{"StartAt": "A"}"#).unwrap().is_none());
}

#[test]
fn malformed_document_is_an_error_not_a_sentinel() {
    assert!(compile("{\"StartAt\": ").is_err());
}

#[test]
fn deterministic_across_calls_on_one_compiler() {
    let input = r#"
StartAt: First
States:
  First:
    Type: Task
    Resource: "arn:aws:states:::task"
    Next: Decide
  Decide:
    Type: Choice
    Choices:
      - Next: Done
      - Next: First
    Default: Done
  Done:
    Type: Succeed
    End: true
"#;
    let mut compiler = FlowchartCompiler::new();
    let first = compiler.compile(input).unwrap().unwrap();
    let second = compiler.compile(input).unwrap().unwrap();
    assert_eq!(first, second);

    // And identical on a fresh instance
    let third = FlowchartCompiler::new().compile(input).unwrap().unwrap();
    assert_eq!(first, third);
}

#[test]
fn wait_edge_labels() {
    let input = r#"
StartAt: FixedDelay
States:
  FixedDelay:
    Type: Wait
    Seconds: 5
    Next: UntilDate
  UntilDate:
    Type: Wait
    Timestamp: "2024-01-01T00:00:00Z"
    Next: FromPath
  FromPath:
    Type: Wait
    SecondsPath: "$.delay"
    Next: Done
  Done:
    Type: Succeed
    End: true
"#;
    let output = compile_ok(input);
    assert!(output.contains("scope0-FixedDelay --> |Waiting for 5s| scope0-UntilDate"));
    assert!(output
        .contains("scope0-UntilDate --> |Waiting until 2024-01-01T00:00:00Z| scope0-FromPath"));
    assert!(output.contains("scope0-FromPath --> |Waiting for $variable| scope0-Done"));
}

#[test]
fn choice_fanout_deduplicates_targets() {
    let input = r#"{"StartAt": "C", "States": {
        "C": {"Type": "Choice",
              "Choices": [{"Next": "A"}, {"Next": "B"}, {"Next": "A"}],
              "Default": "B"},
        "A": {"Type": "Pass", "End": true},
        "B": {"Type": "Pass", "End": true}}}"#;
    let output = compile_ok(input);

    let fanout: Vec<&str> = output
        .lines()
        .filter(|l| l.starts_with("scope0-C{"))
        .collect();
    assert_eq!(
        fanout,
        vec![
            "scope0-C{\"C\"} --> scope0-A[\"A\"]",
            "scope0-C{\"C\"} --> scope0-B[\"B\"]",
        ]
    );
}

#[test]
fn fail_state_gets_fail_class() {
    let input = r#"{"StartAt": "Boom", "States": {
        "Boom": {"Type": "Fail", "Error": "States.Oops", "Cause": "broken", "End": true}}}"#;
    let output = compile_ok(input);
    assert!(output.contains("scope0-Boom[\"Boom\"]:::fail"));
}

#[test]
fn catcher_edges_one_per_catcher() {
    let input = r#"
StartAt: Risky
States:
  Risky:
    Type: Task
    Resource: "arn:aws:states:::task"
    Catch:
      - ErrorEquals: ["States.Timeout"]
        Next: Retry
      - ErrorEquals: ["States.ALL"]
        Next: GiveUp
    Next: Fine
  Retry:
    Type: Pass
    End: true
  GiveUp:
    Type: Fail
    End: true
  Fine:
    Type: Succeed
    End: true
"#;
    let output = compile_ok(input);
    assert!(output.contains("scope0-Risky --> scope0-Fine"));
    assert!(output.contains("scope0-Risky --> scope0-Retry"));
    assert!(output.contains("scope0-Risky --> scope0-GiveUp"));
}

#[test]
fn parallel_branches_become_subgraphs() {
    let input = r#"
StartAt: Fork
States:
  Fork:
    Type: Parallel
    Branches:
      - StartAt: Left
        States:
          Left:
            Type: Pass
            End: true
      - StartAt: Right
        States:
          Right:
            Type: Pass
            End: true
    Next: Join
  Join:
    Type: Succeed
    End: true
"#;
    let output = compile_ok(input);
    assert!(output.contains("subgraph scope0-Fork[\"Parallel: Fork\"]"));
    // Each branch gets its own scope
    assert!(output.contains("scope1-Left[\"Left\"]"));
    assert!(output.contains("scope2-Right[\"Right\"]"));
    // Direct arrow from the parallel node to its successor
    assert!(output.contains("scope0-Fork --> scope0-Join"));
}

#[test]
fn map_re_emits_its_node_outside_the_subgraph() {
    let input = r#"
StartAt: Each
States:
  Each:
    Type: Map
    MaxConcurrency: 2
    Iterator:
      StartAt: Item
      States:
        Item:
          Type: Pass
          End: true
    Next: Done
  Done:
    Type: Succeed
    End: true
"#;
    let output = compile_ok(input);
    assert!(output.contains("subgraph scope0-Each[\"Map: Each\"]"));
    assert!(output.contains("scope1-Item[\"Item\"]"));
    // Standalone re-declaration after the subgraph closes
    assert!(output.lines().any(|l| l == "scope0-Each"));
    assert!(output.contains("scope0-Each --> scope0-Done"));
}

#[test]
fn end_edges_only_for_outermost_scope() {
    let input = r#"
StartAt: Fork
States:
  Fork:
    Type: Parallel
    Branches:
      - StartAt: InnerDone
        States:
          InnerDone:
            Type: Succeed
            End: true
    Next: OuterDone
  OuterDone:
    Type: Succeed
    End: true
"#;
    let output = compile_ok(input);
    let end_edges: Vec<&str> = output
        .lines()
        .filter(|l| l.contains("--> End:::ended"))
        .collect();
    assert_eq!(end_edges, vec!["scope0-OuterDone --> End:::ended"]);
}

#[test]
fn three_levels_of_nesting_get_distinct_scopes() {
    let input = r#"
StartAt: Outer
States:
  Outer:
    Type: Map
    Iterator:
      StartAt: Par
      States:
        Par:
          Type: Parallel
          Branches:
            - StartAt: InnerMap
              States:
                InnerMap:
                  Type: Map
                  Iterator:
                    StartAt: Leaf
                    States:
                      Leaf:
                        Type: Pass
                        End: true
                  End: true
          End: true
    End: true
"#;
    let output = compile_ok(input);
    assert!(output.contains("subgraph scope0-Outer[\"Map: Outer\"]"));
    assert!(output.contains("subgraph scope1-Par[\"Parallel: Par\"]"));
    assert!(output.contains("subgraph scope2-InnerMap[\"Map: InnerMap\"]"));
    assert!(output.contains("scope3-Leaf[\"Leaf\"]"));

    // Nested terminals never reach the shared End marker
    let end_edges: Vec<&str> = output
        .lines()
        .filter(|l| l.contains("--> End:::ended"))
        .collect();
    assert_eq!(end_edges, vec!["scope0-Outer --> End:::ended"]);
}

#[test]
fn terminal_state_with_next_emits_both_edges() {
    let input = r#"{"StartAt": "Odd", "States": {
        "Odd": {"Type": "Pass", "Next": "Other", "End": true},
        "Other": {"Type": "Pass", "End": true}}}"#;
    let output = compile_ok(input);
    assert!(output.contains("scope0-Odd --> scope0-Other"));
    assert!(output.contains("scope0-Odd --> End:::ended"));
}

#[test]
fn dead_end_state_renders_without_outgoing_edge() {
    let input = r#"{"StartAt": "Stuck", "States": {"Stuck": {"Type": "Pass"}}}"#;
    let output = compile_ok(input);
    assert!(output.contains("scope0-Stuck[\"Stuck\"]"));
    assert!(!output.contains("scope0-Stuck -->"));
}

#[test]
fn dangling_next_still_produces_an_edge() {
    let input = r#"{"StartAt": "A", "States": {"A": {"Type": "Pass", "Next": "Ghost"}}}"#;
    let output = compile_ok(input);
    assert!(output.contains("scope0-A --> scope0-Ghost"));
}

#[test]
fn shorthand_tags_are_stripped_before_parsing() {
    let input = "\
StartAt: Call
States:
  Call:
    Type: Task
    Resource: !Ref WorkerFunction
    End: true
";
    let output = compile_ok(input);
    assert!(output.contains("scope0-Call[\"Call\"]"));
}

#[test]
fn direction_flows_into_the_header() {
    let input = r#"{"StartAt": "A", "States": {"A": {"Type": "Pass", "End": true}}}"#;
    let output = compile_with_direction(input, Direction::LeftRight)
        .unwrap()
        .unwrap();
    assert!(output.starts_with("flowchart LR\n"));
}

#[test]
fn punctuation_in_state_names_is_stripped_from_ids() {
    let input = r#"{"StartAt": "Check order?", "States": {
        "Check order?": {"Type": "Pass", "Next": "Ship it!"},
        "Ship it!": {"Type": "Succeed", "End": true}}}"#;
    let output = compile_ok(input);
    assert!(output.contains("scope0-Checkorder[\"Check order?\"]"));
    assert!(output.contains("scope0-Checkorder --> scope0-Shipit"));
    assert!(output.contains("scope0-Shipit[\"Ship it!\"]:::succeed"));
}
