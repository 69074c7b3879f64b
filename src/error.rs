//! Unified diagnostic type used across all phases.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Parse,
    Validate,
    Optimize,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Parse => write!(f, "Parse"),
            Phase::Validate => write!(f, "Validate"),
            Phase::Optimize => write!(f, "Optimize"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptimizerError {
    pub code: String,
    pub phase: Phase,
    pub message: String,
    pub node_id: Option<String>,
}

impl std::fmt::Display for OptimizerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.node_id {
            Some(id) => write!(
                f,
                "[{}:{}] {} (node '{}')",
                self.phase, self.code, self.message, id
            ),
            None => write!(f, "[{}:{}] {}", self.phase, self.code, self.message),
        }
    }
}

impl std::error::Error for OptimizerError {}

impl OptimizerError {
    pub fn parse(code: &str, message: impl Into<String>) -> Self {
        OptimizerError {
            code: code.into(),
            phase: Phase::Parse,
            message: message.into(),
            node_id: None,
        }
    }

    pub fn validate(code: &str, message: impl Into<String>, node_id: Option<String>) -> Self {
        OptimizerError {
            code: code.into(),
            phase: Phase::Validate,
            message: message.into(),
            node_id,
        }
    }

    pub fn optimize(code: &str, message: impl Into<String>, node_id: Option<String>) -> Self {
        OptimizerError {
            code: code.into(),
            phase: Phase::Optimize,
            message: message.into(),
            node_id,
        }
    }
}

/// Failure raised while an optimization pass is running.
///
/// The passes are total for well-formed graphs; the only fallible step is
/// serializing a node's config map for duplicate detection, and that failure
/// propagates to the caller rather than being swallowed.
#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("failed to serialize config of node '{node_id}': {source}")]
    ConfigSerialization {
        node_id: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<OptimizeError> for OptimizerError {
    fn from(e: OptimizeError) -> Self {
        let node_id = match &e {
            OptimizeError::ConfigSerialization { node_id, .. } => Some(node_id.clone()),
        };
        OptimizerError::optimize("O001", e.to_string(), node_id)
    }
}
