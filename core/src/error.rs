use thiserror::Error;

use crate::graph::NodeId;

/// Failures returned by graph construction and queries.
///
/// "Not found" outcomes (no path between two nodes, nothing reachable) are
/// successful results, never one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("node '{0}' not found")]
    UnknownNode(NodeId),

    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("path must contain at least one node")]
    InvalidPath,

    #[error("path step '{from}' -> '{to}' is not an edge")]
    MissingEdgeInPath { from: NodeId, to: NodeId },

    #[error("hop count must be non-negative, got {0}")]
    InvalidHopCount(i64),

    #[error("path cap must be positive, got {0}")]
    InvalidPathCap(i64),

    #[error("edge '{from}' -- '{to}' has invalid weight {weight}")]
    InvalidWeight { from: NodeId, to: NodeId, weight: f64 },
}

pub type Result<T> = std::result::Result<T, GraphError>;
