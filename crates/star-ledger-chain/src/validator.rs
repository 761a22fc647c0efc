//! Chain-wide integrity audit.
//!
//! The validator walks the stored sequence in ascending height order and
//! reports every fault it finds: it never aborts on the first problem and
//! never mutates a block. An empty report means the chain is fully
//! consistent.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use star_ledger_core::{Block, BlockDigest};

use crate::store::Chain;

/// One integrity fault found during a chain audit.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ChainFault {
    /// The block's predecessor link does not match the digest of the block
    /// before it.
    #[error("broken link at height {height}: expected {expected:?}, got {actual:?}")]
    BrokenLink {
        height: u64,
        expected: Option<BlockDigest>,
        actual: Option<BlockDigest>,
    },

    /// The block's stored digest does not match a recomputation over its
    /// stored fields.
    #[error("tampered block at height {height}")]
    Tampered { height: u64 },
}

/// Audit a whole chain, over a stable snapshot taken at call time.
pub async fn validate_chain(chain: &Chain) -> Vec<ChainFault> {
    scan(&chain.blocks().await)
}

/// Walk a block sequence and collect every fault.
///
/// The running expected-predecessor digest starts at the genesis sentinel
/// and always advances to the current block's own digest, even after a
/// mismatch, so a single corrupted link cannot cascade into spurious
/// faults over an otherwise consistent suffix.
pub fn scan(blocks: &[Block]) -> Vec<ChainFault> {
    let mut faults = Vec::new();
    let mut expected_prev: Option<BlockDigest> = None;

    for block in blocks {
        if block.previous_digest != expected_prev {
            faults.push(ChainFault::BrokenLink {
                height: block.height,
                expected: expected_prev,
                actual: block.previous_digest,
            });
        }
        expected_prev = block.digest;

        if !block.validate() {
            faults.push(ChainFault::Tampered {
                height: block.height,
            });
        }
    }

    if !faults.is_empty() {
        warn!(fault_count = faults.len(), "chain audit found faults");
    }
    faults
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use star_ledger_core::{StarClaim, StarRecord};

    fn claim(owner: &str, story: &str) -> StarClaim {
        StarClaim {
            owner: owner.to_string(),
            star: StarRecord::new("6h 45m 8.9s", "-16° 42' 58\"", story),
        }
    }

    async fn chain_of(n: usize) -> Chain {
        let chain = Chain::bootstrapped().await;
        for i in 0..n {
            let block = Block::unsealed(&claim(&format!("addr{i}"), &format!("star {i}"))).unwrap();
            chain.append(block).await.unwrap();
        }
        chain
    }

    #[tokio::test]
    async fn test_clean_chain_has_no_faults() {
        let chain = chain_of(5).await;
        assert!(validate_chain(&chain).await.is_empty());
    }

    #[tokio::test]
    async fn test_genesis_only_chain_is_clean() {
        let chain = Chain::bootstrapped().await;
        assert!(validate_chain(&chain).await.is_empty());
    }

    #[tokio::test]
    async fn test_tampered_body_is_reported() {
        let chain = chain_of(3).await;
        let mut blocks = chain.blocks().await;
        blocks[2].body = Bytes::from_static(b"rewritten history");

        let faults = scan(&blocks);
        assert_eq!(faults, vec![ChainFault::Tampered { height: 2 }]);
    }

    #[tokio::test]
    async fn test_tamper_does_not_abort_scan() {
        let chain = chain_of(4).await;
        let mut blocks = chain.blocks().await;
        blocks[1].time += 60;
        blocks[3].body = Bytes::from_static(b"also rewritten");

        let faults = scan(&blocks);
        assert_eq!(
            faults,
            vec![
                ChainFault::Tampered { height: 1 },
                ChainFault::Tampered { height: 3 },
            ]
        );
    }

    #[tokio::test]
    async fn test_broken_link_does_not_cascade() {
        let chain = chain_of(4).await;
        let mut blocks = chain.blocks().await;

        // Re-seal block 2 against a bogus predecessor. Its own digest is
        // then self-consistent, so only the link fault should appear.
        let bogus = BlockDigest::from_bytes([0x99; 32]);
        let height = blocks[2].height;
        let time = blocks[2].time;
        blocks[2].seal(height, time, Some(bogus));

        // Block 3 now disagrees with block 2's digest as well.
        let faults = scan(&blocks);
        let link_faults: Vec<_> = faults
            .iter()
            .filter(|f| matches!(f, ChainFault::BrokenLink { .. }))
            .collect();
        assert_eq!(link_faults.len(), 2);
        assert!(!faults.iter().any(|f| matches!(f, ChainFault::Tampered { .. })));
    }

    #[tokio::test]
    async fn test_scan_does_not_mutate() {
        let chain = chain_of(2).await;
        let mut blocks = chain.blocks().await;
        blocks[1].body = Bytes::from_static(b"tampered");

        let before = blocks.clone();
        let _ = scan(&blocks);
        assert_eq!(blocks, before);
    }

    #[tokio::test]
    async fn test_validate_chain_on_rehydrated_store() {
        let chain = chain_of(3).await;
        let mut blocks = chain.blocks().await;
        blocks[1].body = Bytes::from_static(b"tampered");

        let corrupt = Chain::from_blocks(blocks);
        let faults = validate_chain(&corrupt).await;
        assert_eq!(faults, vec![ChainFault::Tampered { height: 1 }]);
    }
}
