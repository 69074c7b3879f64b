//! Parallel-execution detection.
//!
//! Single-hop heuristic: each unvisited node plus its unvisited direct
//! successors form a candidate group. This generates scheduling hints, it is
//! not a data-independence proof.

use std::collections::HashSet;

use serde_json::Value;

use crate::parse::graph::WorkflowGraph;
use crate::parse::types::{WorkflowEdge, WorkflowNode};

use super::report::{Impact, Optimization, OptimizationKind};

pub(super) fn detect_parallel_groups(
    nodes: &mut [WorkflowNode],
    edges: &[WorkflowEdge],
    optimizations: &mut Vec<Optimization>,
) {
    let graph = WorkflowGraph::build(nodes, edges);

    let mut visited: HashSet<String> = HashSet::new();
    let mut groups: Vec<Vec<String>> = Vec::new();

    for node in nodes.iter() {
        if !visited.insert(node.id.clone()) {
            continue;
        }
        let mut group = vec![node.id.clone()];
        for succ in graph.successors(&node.id) {
            if visited.insert(succ.to_string()) {
                group.push(succ.to_string());
            }
        }
        if group.len() > 1 {
            groups.push(group);
        }
    }

    for (index, group) in groups.iter().enumerate() {
        for node in nodes.iter_mut().filter(|n| group.contains(&n.id)) {
            node.data
                .config
                .insert("parallelGroup".into(), Value::from(index as u64));
            node.data
                .config
                .insert("canExecuteInParallel".into(), Value::Bool(true));
        }
        optimizations.push(Optimization {
            kind: OptimizationKind::ParallelExecution,
            description: format!("Grouped {} node(s) for parallel execution", group.len()),
            impact: Impact::Performance,
            nodes_affected: group.clone(),
        });
    }
}
