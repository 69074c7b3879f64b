//! Execution-order pass: Kahn's algorithm drives a left-to-right layout.
//!
//! Unlike `petgraph::algo::toposort`, the sort here must survive cycles: a
//! cyclic graph simply yields a short sorted list and passes through with
//! positions untouched.

use std::collections::{HashMap, VecDeque};

use crate::parse::graph::WorkflowGraph;
use crate::parse::types::{Position, WorkflowEdge, WorkflowNode};

use super::report::{Impact, Optimization, OptimizationKind};

pub(super) fn optimize_execution_order(
    spacing: f64,
    nodes: &mut [WorkflowNode],
    edges: &[WorkflowEdge],
    optimizations: &mut Vec<Optimization>,
) {
    let graph = WorkflowGraph::build(nodes, edges);

    let sorted = {
        let mut in_degree: HashMap<&str, usize> = nodes
            .iter()
            .map(|n| (n.id.as_str(), graph.incoming_count(&n.id)))
            .collect();

        // Seed with in-degree-0 nodes in node-list order so the derived
        // layout is deterministic.
        let mut queue: VecDeque<&str> = nodes
            .iter()
            .filter(|n| in_degree.get(n.id.as_str()) == Some(&0))
            .map(|n| n.id.as_str())
            .collect();

        let mut sorted: Vec<String> = Vec::with_capacity(nodes.len());
        while let Some(id) = queue.pop_front() {
            sorted.push(id.to_string());
            for succ in graph.successors(id) {
                if let Some(d) = in_degree.get_mut(succ) {
                    *d -= 1;
                    if *d == 0 {
                        queue.push_back(succ);
                    }
                }
            }
        }
        sorted
    };

    // A short list means a cycle: leave the graph untouched.
    if sorted.len() != nodes.len() {
        return;
    }

    let order: HashMap<&str, usize> = sorted
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect();

    let mut changed = false;
    for node in nodes.iter_mut() {
        if let Some(&i) = order.get(node.id.as_str()) {
            let target = Position {
                x: i as f64 * spacing,
                y: 0.0,
            };
            if node.position != target {
                node.position = target;
                changed = true;
            }
        }
    }

    // Re-running on an already-laid-out graph reports nothing.
    if changed {
        optimizations.push(Optimization {
            kind: OptimizationKind::ExecutionOrder,
            description: "Reordered nodes into topological execution order".into(),
            impact: Impact::Performance,
            nodes_affected: sorted,
        });
    }
}
