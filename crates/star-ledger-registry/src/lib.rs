//! # Star Ledger Registry
//!
//! The star registration protocol: time-stamped ownership challenges and
//! time-boxed signature proofs, committing successful registrations to the
//! chain store.
//!
//! Signature cryptography is an opaque capability behind
//! [`OwnershipVerifier`]; the crate ships an Ed25519 implementation and
//! treats every non-true outcome as "not verified".

pub mod challenge;
pub mod error;
pub mod registry;
pub mod verify;

pub use challenge::{CHALLENGE_TAG, CHALLENGE_WINDOW_SECS};
pub use error::{RegistryError, Result};
pub use registry::StarRegistry;
pub use verify::{Ed25519Verifier, OwnershipVerifier};
