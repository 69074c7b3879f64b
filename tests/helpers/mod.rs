use serde_json::{Map, Value};

use optimizer::optimize::{Optimization, OptimizationKind, OptimizedWorkflow};
use optimizer::parse::types::*;

// =============================================================================
// Node / edge builders
// =============================================================================

pub fn node(id: &str, kind: &str, config: &[(&str, Value)]) -> WorkflowNode {
    node_at(id, kind, 0.0, 0.0, config)
}

pub fn node_at(id: &str, kind: &str, x: f64, y: f64, config: &[(&str, Value)]) -> WorkflowNode {
    let mut map = Map::new();
    for (key, value) in config {
        map.insert((*key).to_string(), value.clone());
    }
    WorkflowNode {
        id: id.into(),
        kind: NodeKind::from(kind.to_string()),
        position: Position { x, y },
        data: NodeData {
            label: id.into(),
            description: None,
            config: map,
            inputs: None,
            outputs: None,
            compliance: None,
            status: None,
        },
    }
}

pub fn with_compliance(mut node: WorkflowNode, compliance: ComplianceMeta) -> WorkflowNode {
    node.data.compliance = Some(compliance);
    node
}

pub fn compliance(level: ComplianceLevel, audit_trail: Option<bool>) -> ComplianceMeta {
    ComplianceMeta {
        level,
        requirements: vec![],
        validations: vec![],
        audit_trail,
        data_retention_days: None,
    }
}

pub fn edge(source: &str, target: &str) -> WorkflowEdge {
    WorkflowEdge {
        source: source.into(),
        target: target.into(),
        edge_type: "smoothstep".into(),
        animated: None,
        label: None,
    }
}

pub fn workflow(nodes: Vec<WorkflowNode>, edges: Vec<WorkflowEdge>) -> Workflow {
    Workflow { nodes, edges }
}

// =============================================================================
// Output inspection
// =============================================================================

pub fn find<'a>(nodes: &'a [WorkflowNode], id: &str) -> &'a WorkflowNode {
    nodes
        .iter()
        .find(|n| n.id == id)
        .unwrap_or_else(|| panic!("node '{}' not found", id))
}

pub fn has_node(nodes: &[WorkflowNode], id: &str) -> bool {
    nodes.iter().any(|n| n.id == id)
}

pub fn records_of<'a>(
    out: &'a OptimizedWorkflow,
    kind: OptimizationKind,
) -> Vec<&'a Optimization> {
    out.optimizations.iter().filter(|o| o.kind == kind).collect()
}

/// Every edge endpoint exists in the node set and no edge is a self-loop.
pub fn assert_edges_well_formed(out: &OptimizedWorkflow) {
    for edge in &out.edges {
        assert!(
            has_node(&out.nodes, &edge.source),
            "dangling edge source '{}'",
            edge.source
        );
        assert!(
            has_node(&out.nodes, &edge.target),
            "dangling edge target '{}'",
            edge.target
        );
        assert_ne!(edge.source, edge.target, "self-loop on '{}'", edge.source);
    }
}
