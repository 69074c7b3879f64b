//! Graph-level structural validation rules (V001–V005).

use std::collections::HashSet;

use petgraph::algo::is_cyclic_directed;

use crate::error::OptimizerError;
use crate::parse::graph::WorkflowGraph;
use crate::parse::types::Workflow;

/// Run all structural validation rules. Returns all errors found.
pub fn validate_structural(workflow: &Workflow) -> Vec<OptimizerError> {
    let mut errors = Vec::new();

    v001_unique_node_ids(workflow, &mut errors);
    v002_edges_reference_existing_nodes(workflow, &mut errors);
    v003_no_duplicate_edges(workflow, &mut errors);
    v004_no_self_loops(workflow, &mut errors);
    v005_no_cycles(workflow, &mut errors);

    errors
}

fn v001_unique_node_ids(workflow: &Workflow, errors: &mut Vec<OptimizerError>) {
    let mut seen = HashSet::new();
    for node in &workflow.nodes {
        if !seen.insert(node.id.as_str()) {
            errors.push(OptimizerError::validate(
                "V001",
                format!("Duplicate node id '{}'", node.id),
                Some(node.id.clone()),
            ));
        }
    }
}

fn v002_edges_reference_existing_nodes(workflow: &Workflow, errors: &mut Vec<OptimizerError>) {
    let ids: HashSet<&str> = workflow.nodes.iter().map(|n| n.id.as_str()).collect();
    for edge in &workflow.edges {
        if !ids.contains(edge.source.as_str()) {
            errors.push(OptimizerError::validate(
                "V002",
                format!("Edge references unknown source node '{}'", edge.source),
                None,
            ));
        }
        if !ids.contains(edge.target.as_str()) {
            errors.push(OptimizerError::validate(
                "V002",
                format!("Edge references unknown target node '{}'", edge.target),
                None,
            ));
        }
    }
}

fn v003_no_duplicate_edges(workflow: &Workflow, errors: &mut Vec<OptimizerError>) {
    let mut seen = HashSet::new();
    for edge in &workflow.edges {
        if !seen.insert(edge.key()) {
            errors.push(OptimizerError::validate(
                "V003",
                format!("Duplicate edge from '{}' to '{}'", edge.source, edge.target),
                None,
            ));
        }
    }
}

fn v004_no_self_loops(workflow: &Workflow, errors: &mut Vec<OptimizerError>) {
    for edge in &workflow.edges {
        if edge.is_self_loop() {
            errors.push(OptimizerError::validate(
                "V004",
                format!("Self-loop detected on node '{}'", edge.source),
                Some(edge.source.clone()),
            ));
        }
    }
}

fn v005_no_cycles(workflow: &Workflow, errors: &mut Vec<OptimizerError>) {
    let graph = WorkflowGraph::build(&workflow.nodes, &workflow.edges);
    if is_cyclic_directed(&graph.graph) {
        errors.push(OptimizerError::validate(
            "V005",
            "Workflow graph contains a cycle; execution order cannot be derived",
            None,
        ));
    }
}
