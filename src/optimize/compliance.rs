//! Compliance-hardening pass.
//!
//! Critical nodes get their audit trail forced on; standard and critical
//! nodes get a downstream validation node synthesized and wired in.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::parse::graph::WorkflowGraph;
use crate::parse::types::{
    ComplianceLevel, ComplianceMeta, NodeData, NodeKind, Position, ValidationCheck, WorkflowEdge,
    WorkflowNode,
};

use super::report::{Impact, Optimization, OptimizationKind};

/// Regulatory rule set preloaded into synthesized validation nodes.
const VALIDATION_RULES: [&str; 3] = ["hipaa", "fda", "gdpr"];
/// Runtime capabilities a validation node demands.
const REQUIRED_CAPABILITIES: [&str; 3] = ["data-encryption", "access-control", "audit-trail"];
/// Seven years, in days.
const RETENTION_DAYS: u32 = 2555;

pub(super) fn harden_compliance(
    spacing: f64,
    nodes: &mut Vec<WorkflowNode>,
    edges: &mut Vec<WorkflowEdge>,
    optimizations: &mut Vec<Optimization>,
) {
    let graph = WorkflowGraph::build(nodes, edges);
    let mut ids: HashSet<String> = nodes.iter().map(|n| n.id.clone()).collect();

    let existing = nodes.len();
    for i in 0..existing {
        let Some(compliance) = nodes[i].data.compliance.as_ref() else {
            continue;
        };
        let level = compliance.level;
        let audit_trail = compliance.audit_trail;

        if level == ComplianceLevel::Critical && audit_trail != Some(true) {
            if let Some(c) = nodes[i].data.compliance.as_mut() {
                c.audit_trail = Some(true);
            }
            optimizations.push(Optimization {
                kind: OptimizationKind::ComplianceEnhancement,
                description: format!("Enabled audit trail on critical node '{}'", nodes[i].id),
                impact: Impact::Compliance,
                nodes_affected: vec![nodes[i].id.clone()],
            });
        }

        if level != ComplianceLevel::Basic && !has_validation_successor(&graph, &nodes[i].id) {
            let validator = build_validation_node(&nodes[i], spacing, &mut ids);
            edges.push(WorkflowEdge {
                source: nodes[i].id.clone(),
                target: validator.id.clone(),
                edge_type: "smoothstep".into(),
                animated: Some(true),
                label: None,
            });
            optimizations.push(Optimization {
                kind: OptimizationKind::ComplianceEnhancement,
                description: format!("Added compliance validation after '{}'", nodes[i].id),
                impact: Impact::Compliance,
                nodes_affected: vec![nodes[i].id.clone(), validator.id.clone()],
            });
            nodes.push(validator);
        }
    }
}

/// Whether `node_id` already feeds an existing validation node.
///
/// Known gap: always reports `false`, so a validator is synthesized even
/// when one is already wired downstream.
/// TODO: walk `graph.successors(node_id)` and return true when a
/// `data-validate` node is among them.
fn has_validation_successor(_graph: &WorkflowGraph, _node_id: &str) -> bool {
    false
}

fn unique_id(base: String, ids: &mut HashSet<String>) -> String {
    if ids.insert(base.clone()) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}-{}", base, n);
        if ids.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

fn build_validation_node(
    source: &WorkflowNode,
    spacing: f64,
    ids: &mut HashSet<String>,
) -> WorkflowNode {
    let id = unique_id(format!("{}-validation", source.id), ids);

    let mut config = Map::new();
    config.insert(
        "rules".into(),
        Value::Array(VALIDATION_RULES.iter().map(|r| Value::from(*r)).collect()),
    );
    config.insert("strictMode".into(), Value::Bool(true));

    WorkflowNode {
        id,
        kind: NodeKind::DataValidate,
        position: Position {
            x: source.position.x + spacing,
            y: source.position.y,
        },
        data: NodeData {
            label: "Compliance Validation".into(),
            description: Some(format!(
                "Automated regulatory checks for '{}'",
                source.data.label
            )),
            config,
            inputs: None,
            outputs: None,
            compliance: Some(ComplianceMeta {
                level: ComplianceLevel::Critical,
                requirements: REQUIRED_CAPABILITIES.iter().map(|s| s.to_string()).collect(),
                validations: VALIDATION_RULES
                    .iter()
                    .map(|name| ValidationCheck {
                        name: (*name).into(),
                        validated: false,
                    })
                    .collect(),
                audit_trail: Some(true),
                data_retention_days: Some(RETENTION_DAYS),
            }),
            status: None,
        },
    }
}
