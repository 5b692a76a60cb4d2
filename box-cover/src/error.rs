//! Errors reported at the boundaries of the crate.
//!
//! The covering algorithms themselves do not fail: once a graph and a non-negative radius have been
//! accepted, every run terminates with a cover. Broken internal invariants panic instead.

use thiserror::Error;

/// Errors produced while loading graphs, validating parameters, or running sweeps.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller supplied a parameter outside its domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An edge names a node the graph does not have.
    #[error("node {node} is out of range for a graph with {nodes} nodes")]
    NodeOutOfRange {
        /// The offending node.
        node: usize,
        /// Number of nodes in the graph.
        nodes: usize,
    },
    /// A line of an edge list could not be read as a pair of node labels.
    #[error("malformed edge list at line {line}: {reason}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Encoding or decoding JSON failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// A timely worker failed or could not be started.
    #[error("worker failed: {0}")]
    Worker(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Validates a radius (or box diameter) supplied as a signed integer.
///
/// Negative values are rejected here so that the covering algorithms only ever see `u32`.
pub fn checked_radius(value: i64) -> Result<u32> {
    if value < 0 {
        return Err(Error::InvalidArgument(format!("radius must be non-negative, got {}", value)));
    }
    u32::try_from(value)
        .map_err(|_| Error::InvalidArgument(format!("radius {} does not fit in 32 bits", value)))
}
