//! Error types for the Star Ledger core.

use thiserror::Error;

/// Core errors that can occur during block operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The genesis block carries only the fixed marker, never a star claim.
    #[error("genesis block has no payload")]
    GenesisHasNoPayload,

    #[error("payload encoding error: {0}")]
    Encode(String),

    #[error("payload decoding error: {0}")]
    Decode(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
