//! Redundancy-removal pass.
//!
//! Two nodes are duplicates when their kind and canonically-serialized
//! config are identical. The first-encountered node of each group survives
//! and every edge is remapped onto it.

use std::collections::HashMap;

use crate::error::OptimizeError;
use crate::parse::types::{WorkflowEdge, WorkflowNode};

use super::report::{Impact, Optimization, OptimizationKind};

pub(super) fn remove_redundant_nodes(
    nodes: &mut Vec<WorkflowNode>,
    edges: &mut Vec<WorkflowEdge>,
    optimizations: &mut Vec<Optimization>,
) -> Result<(), OptimizeError> {
    // signature → slot in `groups`, groups kept in first-encountered order
    let mut group_of: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for (i, node) in nodes.iter().enumerate() {
        let config_json =
            serde_json::to_string(&node.data.config).map_err(|source| {
                OptimizeError::ConfigSerialization {
                    node_id: node.id.clone(),
                    source,
                }
            })?;
        let signature = format!("{}|{}", node.kind.as_str(), config_json);
        match group_of.get(&signature) {
            Some(&slot) => groups[slot].push(i),
            None => {
                group_of.insert(signature, groups.len());
                groups.push(vec![i]);
            }
        }
    }

    let mut remap: HashMap<String, String> = HashMap::new();
    for group in groups.iter().filter(|g| g.len() > 1) {
        let primary = &nodes[group[0]];
        let removed: Vec<String> = group[1..].iter().map(|&i| nodes[i].id.clone()).collect();
        for id in &removed {
            remap.insert(id.clone(), primary.id.clone());
        }
        optimizations.push(Optimization {
            kind: OptimizationKind::RedundancyRemoval,
            description: format!(
                "Removed {} duplicate '{}' node(s), keeping '{}'",
                removed.len(),
                primary.kind.as_str(),
                primary.id
            ),
            impact: Impact::Performance,
            nodes_affected: removed,
        });
    }

    nodes.retain(|n| !remap.contains_key(&n.id));
    // Runs even with an empty remap: pre-existing self-loops and duplicate
    // (source, target, type) triples are invalid and get pruned here.
    super::remap_edges(edges, &remap);

    Ok(())
}
