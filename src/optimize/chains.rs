//! Data-flow pass: merge chains of `data-*` nodes.
//!
//! A chain is walked along the first outgoing edge (edge-list order) while
//! the next node is an unvisited data node. Chains longer than two collapse
//! into their head; edges are remapped so upstream and downstream
//! connectivity survives the merge.

use std::collections::{HashMap, HashSet};

use crate::parse::types::{WorkflowEdge, WorkflowNode};

use super::report::{Impact, Optimization, OptimizationKind};

pub(super) fn merge_transform_chains(
    nodes: &mut Vec<WorkflowNode>,
    edges: &mut Vec<WorkflowEdge>,
    optimizations: &mut Vec<Optimization>,
) {
    let chains = collect_chains(nodes, edges);
    if chains.is_empty() {
        return;
    }

    let mut remap: HashMap<String, String> = HashMap::new();
    for chain in &chains {
        let mut merged = serde_json::Map::new();
        for id in chain {
            if let Some(node) = nodes.iter().find(|n| &n.id == id) {
                for (key, value) in &node.data.config {
                    merged.insert(key.clone(), value.clone());
                }
            }
        }

        let steps = chain.len();
        if let Some(head) = nodes.iter_mut().find(|n| n.id == chain[0]) {
            head.data.config = merged;
            head.data.label = "Merged Data Transform".into();
            head.data.description = Some(format!("Merged {} chained transformation steps", steps));
        }

        for id in &chain[1..] {
            remap.insert(id.clone(), chain[0].clone());
        }

        optimizations.push(Optimization {
            kind: OptimizationKind::DataFlowOptimization,
            description: format!("Merged {} chained data nodes into '{}'", steps, chain[0]),
            impact: Impact::Maintainability,
            nodes_affected: chain.clone(),
        });
    }

    nodes.retain(|n| !remap.contains_key(&n.id));
    // Internal chain edges become self-loops under the remap and are pruned;
    // edges in and out of the chain reattach to the head.
    super::remap_edges(edges, &remap);
}

fn collect_chains(nodes: &[WorkflowNode], edges: &[WorkflowEdge]) -> Vec<Vec<String>> {
    let index_of: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.as_str(), i))
        .collect();

    let mut visited: HashSet<String> = HashSet::new();
    let mut chains: Vec<Vec<String>> = Vec::new();

    for node in nodes {
        if !node.kind.is_data() || !visited.insert(node.id.clone()) {
            continue;
        }
        let mut chain = vec![node.id.clone()];
        let mut current = node.id.as_str();
        loop {
            let Some(edge) = edges.iter().find(|e| e.source == current) else {
                break;
            };
            let Some(&next_idx) = index_of.get(edge.target.as_str()) else {
                break;
            };
            let next = &nodes[next_idx];
            if !next.kind.is_data() || !visited.insert(next.id.clone()) {
                break;
            }
            chain.push(next.id.clone());
            current = next.id.as_str();
        }
        if chain.len() > 2 {
            chains.push(chain);
        }
    }

    chains
}
