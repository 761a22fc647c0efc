//! Error types for the registration protocol.

use thiserror::Error;

use star_ledger_chain::{ChainError, ChainFault};
use star_ledger_core::CoreError;

/// Errors that can occur during challenge issuance and submission.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A challenge was requested for an empty or absent wallet address.
    #[error("empty wallet address")]
    EmptyAddress,

    /// The challenge message does not carry a parseable issuance time.
    #[error("malformed challenge message: {0:?}")]
    MalformedChallenge(String),

    /// The challenge validity window elapsed. The caller must request a
    /// fresh challenge; nothing is retried here.
    #[error("challenge expired: {elapsed_secs}s elapsed")]
    ChallengeExpired { elapsed_secs: i64 },

    /// The signature did not prove ownership of the address.
    #[error("ownership not verified")]
    OwnershipNotVerified,

    /// The chain failed its integrity audit; no new block is committed on
    /// top of a corrupt chain.
    #[error("chain corrupt: {} fault(s) detected", .0.len())]
    ChainCorrupt(Vec<ChainFault>),

    /// Chain store failure.
    #[error(transparent)]
    Chain(#[from] ChainError),

    /// Payload encoding failure.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
