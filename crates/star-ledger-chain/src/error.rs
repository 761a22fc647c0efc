//! Error types for the chain store.

use thiserror::Error;

use star_ledger_core::BlockDigest;

/// Errors that can occur during chain store operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// No block with the given digest exists.
    #[error("no block with digest {0}")]
    NotFound(BlockDigest),

    /// The height did not advance after a push. This means the append
    /// serialization contract was broken and should be treated as a
    /// defect signal at the boundary, not retried.
    #[error("append inconsistency: height did not advance")]
    AppendInconsistency,
}

/// Result type for chain store operations.
pub type Result<T> = std::result::Result<T, ChainError>;
