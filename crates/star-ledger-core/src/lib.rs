//! # Star Ledger Core
//!
//! Pure primitives for the Star Ledger: blocks, digests, payloads, and
//! canonicalization.
//!
//! This crate contains no I/O, no locking, no networking. It is pure
//! computation over the ledger's data structures.
//!
//! ## Key Types
//!
//! - [`Block`] - One entry in the append-only ledger
//! - [`BlockDigest`] - Blake3 content digest used for linking and tamper detection
//! - [`StarClaim`] - A star bound to its wallet-address owner
//!
//! ## Canonicalization
//!
//! A block's digest covers the deterministic CBOR encoding of its sealed
//! fields. See [`canonical`].

pub mod block;
pub mod canonical;
pub mod digest;
pub mod error;
pub mod payload;

pub use block::Block;
pub use canonical::seal_bytes;
pub use digest::BlockDigest;
pub use error::{CoreError, Result};
pub use payload::{StarClaim, StarRecord, GENESIS_MARKER};
