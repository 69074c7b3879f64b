//! Optimization audit records.
//!
//! Every pass describes what it changed through these records; the editor
//! shows them to the user alongside the rewritten graph.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptimizationKind {
    RedundancyRemoval,
    ExecutionOrder,
    ParallelExecution,
    DataFlowOptimization,
    ComplianceEnhancement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Performance,
    Compliance,
    Maintainability,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    #[serde(rename = "type")]
    pub kind: OptimizationKind,
    pub description: String,
    pub impact: Impact,
    pub nodes_affected: Vec<String>,
}
