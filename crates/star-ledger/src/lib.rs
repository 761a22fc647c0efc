//! # Star Ledger
//!
//! The unified API for the Star Ledger: a minimal append-only ledger of
//! cryptographically linked blocks with a wallet-ownership registration
//! workflow.
//!
//! ## Overview
//!
//! - **Blocks**: immutable once sealed; each links to its predecessor's
//!   digest and detects tampering through digest recomputation
//! - **Chain store**: in-memory, append-only, serialized appends
//! - **Registration**: time-boxed challenge/sign/submit cycle binding a
//!   star claim to a wallet address
//! - **Validation**: a chain-wide audit reporting every broken link and
//!   tampered block
//!
//! ## Usage
//!
//! ```rust,no_run
//! use star_ledger::StarLedger;
//!
//! async fn example() {
//!     // Bootstrap with the production Ed25519 verifier; the genesis
//!     // block exists before any caller can observe the chain.
//!     let ledger = StarLedger::with_ed25519().await;
//!
//!     // Issue a challenge, have the wallet sign it off-system, submit.
//!     let message = ledger.request_challenge("<hex wallet address>").unwrap();
//!     // let block = ledger
//!     //     .submit_registration("<hex wallet address>", &message, "<hex signature>", star)
//!     //     .await
//!     //     .unwrap();
//!
//!     assert_eq!(ledger.get_chain_height().await, 0);
//!     assert!(ledger.validate_chain().await.is_empty());
//! }
//! ```

pub mod error;
pub mod ledger;

// Re-export component crates
pub use star_ledger_chain as chain;
pub use star_ledger_core as core;
pub use star_ledger_registry as registry;

// Re-export main types for convenience
pub use error::{LedgerError, Result};
pub use ledger::StarLedger;

// Re-export commonly used component types
pub use star_ledger_chain::{Chain, ChainError, ChainFault};
pub use star_ledger_core::{Block, BlockDigest, CoreError, StarClaim, StarRecord};
pub use star_ledger_registry::{
    Ed25519Verifier, OwnershipVerifier, RegistryError, CHALLENGE_TAG, CHALLENGE_WINDOW_SECS,
};
