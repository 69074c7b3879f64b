//! Per-node validation rules (N001–N004).

use std::collections::HashSet;

use crate::error::OptimizerError;
use crate::parse::types::{NodeKind, WorkflowNode};

/// Validate a single node. Returns all errors found.
pub fn validate_node_rules(node: &WorkflowNode) -> Vec<OptimizerError> {
    let mut errors = Vec::new();
    let node_id = Some(node.id.clone());

    if node.data.label.trim().is_empty() {
        errors.push(OptimizerError::validate(
            "N001",
            "Node label must not be empty",
            node_id.clone(),
        ));
    }

    if let Some(compliance) = &node.data.compliance {
        if compliance.data_retention_days == Some(0) {
            errors.push(OptimizerError::validate(
                "N002",
                "Compliance data retention must be at least 1 day",
                node_id.clone(),
            ));
        }

        let mut seen = HashSet::new();
        for check in &compliance.validations {
            if !seen.insert(check.name.as_str()) {
                errors.push(OptimizerError::validate(
                    "N004",
                    format!("Duplicate validation check '{}'", check.name),
                    node_id.clone(),
                ));
            }
        }
    }

    if node.kind == NodeKind::DataValidate && !node.data.config.contains_key("rules") {
        errors.push(OptimizerError::validate(
            "N003",
            "Validation node must declare a 'rules' list in its config",
            node_id,
        ));
    }

    errors
}
