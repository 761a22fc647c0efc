//! Error types for the ledger facade.

use thiserror::Error;

use star_ledger_chain::ChainError;
use star_ledger_core::CoreError;
use star_ledger_registry::RegistryError;

/// Errors surfaced by the ledger API.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Registration protocol error.
    #[error("registration error: {0}")]
    Registry(#[from] RegistryError),

    /// Chain store error.
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    /// Block payload error.
    #[error("payload error: {0}")]
    Core(#[from] CoreError),
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
