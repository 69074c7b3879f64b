//! Rust types mirroring the visual editor's workflow JSON.
//!
//! These types are the serde target for the canvas snapshot the frontend
//! hands to the optimizer. Node kinds are an open vocabulary owned by the
//! frontend registry; the optimizer only gives special meaning to the
//! `data-` wire-name family and the `data-validate` kind.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// TOP-LEVEL WORKFLOW
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    pub nodes: Vec<WorkflowNode>,
    pub edges: Vec<WorkflowEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub edge_type: String,
    pub animated: Option<bool>,
    pub label: Option<String>,
}

impl WorkflowEdge {
    /// Edges have no identity beyond this triple.
    pub fn key(&self) -> (&str, &str, &str) {
        (&self.source, &self.target, &self.edge_type)
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

// =============================================================================
// NODE KINDS
// =============================================================================

/// Step kinds registered by the frontend, plus an escape hatch for kinds
/// the optimizer has no special handling for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    ScheduleTrigger,
    WebhookTrigger,
    ResearchAgent,
    ContentAgent,
    DataTransform,
    DataFilter,
    DataAggregate,
    DataValidate,
    Condition,
    Action,
    Other(String),
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::ScheduleTrigger => "schedule-trigger",
            NodeKind::WebhookTrigger => "webhook-trigger",
            NodeKind::ResearchAgent => "research-agent",
            NodeKind::ContentAgent => "content-agent",
            NodeKind::DataTransform => "data-transform",
            NodeKind::DataFilter => "data-filter",
            NodeKind::DataAggregate => "data-aggregate",
            NodeKind::DataValidate => "data-validate",
            NodeKind::Condition => "condition",
            NodeKind::Action => "action",
            NodeKind::Other(s) => s,
        }
    }

    /// The `data-` wire-name family used by the transform-chain merge pass.
    pub fn is_data(&self) -> bool {
        self.as_str().starts_with("data-")
    }

    pub fn is_trigger(&self) -> bool {
        matches!(self, NodeKind::ScheduleTrigger | NodeKind::WebhookTrigger)
    }
}

impl From<String> for NodeKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "schedule-trigger" => NodeKind::ScheduleTrigger,
            "webhook-trigger" => NodeKind::WebhookTrigger,
            "research-agent" => NodeKind::ResearchAgent,
            "content-agent" => NodeKind::ContentAgent,
            "data-transform" => NodeKind::DataTransform,
            "data-filter" => NodeKind::DataFilter,
            "data-aggregate" => NodeKind::DataAggregate,
            "data-validate" => NodeKind::DataValidate,
            "condition" => NodeKind::Condition,
            "action" => NodeKind::Action,
            _ => NodeKind::Other(s),
        }
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.as_str().to_string()
    }
}

// =============================================================================
// NODE
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub position: Position,
    pub data: NodeData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub label: String,
    pub description: Option<String>,
    /// Free-form per-kind configuration. The BTree-backed map makes its
    /// serialization key-order canonical, which the dedup pass relies on.
    #[serde(default)]
    pub config: Map<String, Value>,
    pub inputs: Option<Vec<PortDef>>,
    pub outputs: Option<Vec<PortDef>>,
    pub compliance: Option<ComplianceMeta>,
    pub status: Option<ExecutionStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortDef {
    pub id: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Idle,
    Running,
    Completed,
    Failed,
}

// =============================================================================
// COMPLIANCE METADATA
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceMeta {
    pub level: ComplianceLevel,
    /// Capabilities the executing runtime must provide for this node.
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Named regulatory checks, each flipped to `validated` as it passes.
    #[serde(default)]
    pub validations: Vec<ValidationCheck>,
    pub audit_trail: Option<bool>,
    pub data_retention_days: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceLevel {
    Basic,
    Standard,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationCheck {
    pub name: String,
    pub validated: bool,
}
