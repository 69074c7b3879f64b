//! Pre-flight validation of the editor graph.
//!
//! Validation is advisory: the optimizer itself tolerates malformed graphs,
//! so the editor runs these checks before persisting or optimizing.

pub mod node_rules;
pub mod structural;

use crate::error::OptimizerError;
use crate::parse::types::{Workflow, WorkflowNode};

/// Validate the entire workflow graph (structural + node rules).
pub fn validate_graph(workflow: &Workflow) -> Vec<OptimizerError> {
    let mut errors = structural::validate_structural(workflow);

    for node in &workflow.nodes {
        errors.extend(validate_node(node));
    }

    errors
}

/// Validate a single node.
pub fn validate_node(node: &WorkflowNode) -> Vec<OptimizerError> {
    node_rules::validate_node_rules(node)
}
