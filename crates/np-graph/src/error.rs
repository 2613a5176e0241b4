//! Graph-subsystem error type.
//!
//! None of these are fatal.  A spawn trigger that receives any of them simply
//! skips that spawn.

use thiserror::Error;

use np_core::NodeId;

/// Errors produced by `np-graph`.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("no path from {from} to {to} within the proximity threshold")]
    NoPath { from: NodeId, to: NodeId },

    #[error("node {node} out of range for a graph of {count} nodes")]
    NodeOutOfRange { node: NodeId, count: usize },

    #[error("start and target are the same node {0}")]
    SameEndpoints(NodeId),
}

pub type GraphResult<T> = Result<T, GraphError>;
