//! Error types for descriptor construction and engine binding.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::id::{NodeId, RouterId};

/// Errors raised by [`NetworkConfigDescriptor`](super::NetworkConfigDescriptor).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("invalid network config: {0}")]
    InvalidConfig(String),
    #[error("node index {index} out of range for router map of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors raised when an engine binds a descriptor to its topology.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("router map has {actual} entries but the topology has {expected} nodes")]
    NodeCountMismatch { expected: usize, actual: usize },
    #[error("node {node} is attached to negative router id {router}")]
    NegativeRouterId { node: NodeId, router: RouterId },
    #[error("node {node} is attached to router {router}, topology has {num_routers} routers")]
    UnknownRouter {
        node: NodeId,
        router: RouterId,
        num_routers: usize,
    },
    #[error("booksim config {path:?} is not readable")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
