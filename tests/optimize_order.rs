//! Integration tests for the execution-order pass.

#[allow(dead_code)]
mod helpers;

use helpers::*;
use optimizer::optimize::{OptimizationKind, Optimizer};
use serde_json::json;

#[test]
fn linear_chain_gets_topological_layout() {
    let wf = workflow(
        vec![
            node_at("d", "condition", 10.0, 40.0, &[("field", json!("score"))]),
            node_at("b", "research-agent", 900.0, 10.0, &[("query", json!("cms"))]),
            node_at("a", "schedule-trigger", 300.0, 70.0, &[("schedule", json!("0 9 * * 1"))]),
            node_at("c", "action", 500.0, 20.0, &[("cmd", json!("draft"))]),
        ],
        vec![edge("a", "b"), edge("b", "c"), edge("c", "d")],
    );

    let out = Optimizer::new().optimize(&wf).unwrap();

    assert_eq!(find(&out.nodes, "a").position.x, 0.0);
    assert_eq!(find(&out.nodes, "b").position.x, 200.0);
    assert_eq!(find(&out.nodes, "c").position.x, 400.0);
    assert_eq!(find(&out.nodes, "d").position.x, 600.0);
    for node in &out.nodes {
        assert_eq!(node.position.y, 0.0);
    }

    let records = records_of(&out, OptimizationKind::ExecutionOrder);
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].nodes_affected,
        vec!["a".to_string(), "b".into(), "c".into(), "d".into()]
    );
}

#[test]
fn cyclic_graph_passes_through_unchanged() {
    let wf = workflow(
        vec![
            node_at("a", "action", 120.0, 35.0, &[("cmd", json!("poll"))]),
            node_at("b", "condition", 340.0, 80.0, &[("field", json!("done"))]),
        ],
        vec![edge("a", "b"), edge("b", "a")],
    );

    let out = Optimizer::new().optimize(&wf).unwrap();

    assert!(records_of(&out, OptimizationKind::ExecutionOrder).is_empty());
    assert_eq!(find(&out.nodes, "a").position.x, 120.0);
    assert_eq!(find(&out.nodes, "a").position.y, 35.0);
    assert_eq!(find(&out.nodes, "b").position.x, 340.0);
    assert_eq!(find(&out.nodes, "b").position.y, 80.0);
}

#[test]
fn ordering_is_idempotent() {
    let wf = workflow(
        vec![
            node_at("a", "schedule-trigger", 50.0, 50.0, &[("schedule", json!("@daily"))]),
            node_at("b", "research-agent", 20.0, 90.0, &[("query", json!("fda"))]),
            node_at("c", "action", 80.0, 30.0, &[("cmd", json!("publish"))]),
        ],
        vec![edge("a", "b"), edge("b", "c")],
    );

    let first = Optimizer::new().optimize(&wf).unwrap();
    assert_eq!(records_of(&first, OptimizationKind::ExecutionOrder).len(), 1);

    let again = workflow(first.nodes.clone(), first.edges.clone());
    let second = Optimizer::new().optimize(&again).unwrap();
    assert!(
        records_of(&second, OptimizationKind::ExecutionOrder).is_empty(),
        "positions already match the derived layout"
    );
}

#[test]
fn edges_stay_monotone_in_x() {
    let wf = workflow(
        vec![
            node("t", "schedule-trigger", &[("schedule", json!("@weekly"))]),
            node("left", "research-agent", &[("query", json!("hipaa"))]),
            node("right", "content-agent", &[("tone", json!("clinical"))]),
            node("join", "action", &[("cmd", json!("merge"))]),
        ],
        vec![
            edge("t", "left"),
            edge("t", "right"),
            edge("left", "join"),
            edge("right", "join"),
        ],
    );

    let out = Optimizer::new().optimize(&wf).unwrap();

    for e in &out.edges {
        let source = find(&out.nodes, &e.source);
        let target = find(&out.nodes, &e.target);
        assert!(
            source.position.x < target.position.x,
            "edge {} -> {} not monotone",
            e.source,
            e.target
        );
    }
}
