//! # Star Ledger Chain
//!
//! The in-memory chain store and the chain-wide integrity validator.
//!
//! The store owns the ordered, append-only block sequence. All mutation is
//! funneled through one serialized append critical section; reads work on
//! stable snapshots. The validator audits the whole sequence for broken
//! links and tampered blocks without mutating anything.

pub mod error;
pub mod store;
pub mod validator;

pub use error::{ChainError, Result};
pub use store::Chain;
pub use validator::{scan, validate_chain, ChainFault};
