//! Optimization phase: Workflow → OptimizedWorkflow.
//!
//! Five passes applied unconditionally, in fixed order, each consuming the
//! previous pass's output: redundancy removal, execution-order layout,
//! parallel-group detection, transform-chain merging, compliance hardening.

mod chains;
mod compliance;
mod dedup;
mod order;
mod parallel;
pub mod report;

pub use report::{Impact, Optimization, OptimizationKind};

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::OptimizeError;
use crate::parse::types::{Workflow, WorkflowEdge, WorkflowNode};

/// Output of a full optimizer run: the rewritten graph plus the ordered
/// audit trail of applied optimizations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizedWorkflow {
    pub nodes: Vec<WorkflowNode>,
    pub edges: Vec<WorkflowEdge>,
    pub optimizations: Vec<Optimization>,
}

/// Workflow-graph optimizer.
///
/// An explicit constructed instance: all working state is per-call, so one
/// optimizer can be shared across calls and threads freely.
#[derive(Debug, Clone)]
pub struct Optimizer {
    /// Horizontal distance between consecutive nodes in the derived layout,
    /// also the offset for synthesized validation nodes.
    layout_spacing: f64,
}

impl Default for Optimizer {
    fn default() -> Self {
        Optimizer {
            layout_spacing: 200.0,
        }
    }
}

impl Optimizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run all five passes over a snapshot of the input graph.
    ///
    /// The input is never mutated; the caller decides whether to adopt or
    /// discard the returned graph. The only failure is config serialization
    /// inside the dedup pass, which propagates.
    pub fn optimize(&self, workflow: &Workflow) -> Result<OptimizedWorkflow, OptimizeError> {
        let mut nodes = workflow.nodes.clone();
        let mut edges = workflow.edges.clone();
        let mut optimizations = Vec::new();

        dedup::remove_redundant_nodes(&mut nodes, &mut edges, &mut optimizations)?;
        order::optimize_execution_order(self.layout_spacing, &mut nodes, &edges, &mut optimizations);
        parallel::detect_parallel_groups(&mut nodes, &edges, &mut optimizations);
        chains::merge_transform_chains(&mut nodes, &mut edges, &mut optimizations);
        compliance::harden_compliance(self.layout_spacing, &mut nodes, &mut edges, &mut optimizations);

        Ok(OptimizedWorkflow {
            nodes,
            edges,
            optimizations,
        })
    }
}

/// Rewrite edge endpoints through `remap`, then drop edges that became (or
/// already were) self-loops and collapse edges identical in
/// (source, target, type); edges carry no identity beyond that triple.
fn remap_edges(edges: &mut Vec<WorkflowEdge>, remap: &HashMap<String, String>) {
    for edge in edges.iter_mut() {
        if let Some(primary) = remap.get(&edge.source) {
            edge.source = primary.clone();
        }
        if let Some(primary) = remap.get(&edge.target) {
            edge.target = primary.clone();
        }
    }

    let mut seen = HashSet::new();
    edges.retain(|e| {
        !e.is_self_loop() && seen.insert((e.source.clone(), e.target.clone(), e.edge_type.clone()))
    });
}
