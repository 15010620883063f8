use thiserror::Error;

use crate::arena::NodeId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Invalid state for node {node}: {reason}")]
    InvalidState {
        node: NodeId,
        reason: String,
    },

    #[error("Node not found in this tree: {0}")]
    NodeNotFound(NodeId),

    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },
}

impl TreeError {
    pub(crate) fn invalid_state(node: NodeId, reason: impl Into<String>) -> Self {
        Self::InvalidState {
            node,
            reason: reason.into(),
        }
    }

    /// True for the attachment-guard failure.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
