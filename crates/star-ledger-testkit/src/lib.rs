//! # Star Ledger Testkit
//!
//! Fixtures, test-double verifiers, and proptest strategies for exercising
//! the Star Ledger. Wallet signing keys live here; the production crates
//! only ever verify.

pub mod fixtures;
pub mod generators;
pub mod verifiers;

pub use fixtures::{wallets, LedgerFixture, WalletFixture};
pub use generators::{arb_claim, arb_star, sample_star};
pub use verifiers::{ApproveAll, RejectAll};
