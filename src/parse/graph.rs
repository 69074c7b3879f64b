//! petgraph-based directed graph wrapper for the visual workflow.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{WorkflowEdge, WorkflowNode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeLabel {
    pub edge_type: String,
}

pub struct WorkflowGraph {
    pub graph: DiGraph<String, EdgeLabel>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl WorkflowGraph {
    /// Build the adjacency structure for a node/edge snapshot.
    ///
    /// Edges whose source or target is absent from the node set are skipped:
    /// the optimizer tolerates malformed input, and `validate` reports
    /// dangling references separately (V002).
    pub fn build(nodes: &[WorkflowNode], edges: &[WorkflowEdge]) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        for node in nodes {
            let idx = graph.add_node(node.id.clone());
            node_indices.insert(node.id.clone(), idx);
        }

        for edge in edges {
            if let (Some(&s), Some(&t)) = (
                node_indices.get(&edge.source),
                node_indices.get(&edge.target),
            ) {
                graph.add_edge(
                    s,
                    t,
                    EdgeLabel {
                        edge_type: edge.edge_type.clone(),
                    },
                );
            }
        }

        WorkflowGraph { graph, node_indices }
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.node_indices.contains_key(node_id)
    }

    /// Direct successors in edge insertion order.
    pub fn successors(&self, node_id: &str) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return vec![];
        };
        // petgraph yields neighbors in reverse insertion order.
        let mut out: Vec<&str> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| self.graph[n].as_str())
            .collect();
        out.reverse();
        out
    }

    pub fn predecessors(&self, node_id: &str) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return vec![];
        };
        let mut out: Vec<&str> = self
            .graph
            .neighbors_directed(idx, Direction::Incoming)
            .map(|n| self.graph[n].as_str())
            .collect();
        out.reverse();
        out
    }

    /// Incoming edge count (counts parallel edges individually).
    pub fn incoming_count(&self, node_id: &str) -> usize {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return 0;
        };
        self.graph.edges_directed(idx, Direction::Incoming).count()
    }

    pub fn outgoing_count(&self, node_id: &str) -> usize {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return 0;
        };
        self.graph.edges_directed(idx, Direction::Outgoing).count()
    }
}
