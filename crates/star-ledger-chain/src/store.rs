//! In-memory chain store: an ordered, append-only sequence of blocks.
//!
//! All data is lost when the store is dropped; persistence is out of scope.
//! Thread-safe via RwLock. Appends run inside one critical section so that
//! height, the last digest, and the push form a single atomic unit; reads
//! take cheap snapshots and never observe a half-written block.

use std::sync::RwLock;

use tracing::{debug, info};

use star_ledger_core::{Block, BlockDigest};

use crate::error::{ChainError, Result};

/// The chain store. Owns the block sequence; the only writer is `append`
/// (and the genesis path of `initialize`).
pub struct Chain {
    inner: RwLock<Vec<Block>>,
}

impl Chain {
    /// Create an empty, uninitialized store.
    ///
    /// Callers must run [`Chain::initialize`] before any other operation;
    /// [`Chain::bootstrapped`] does both.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    /// Create a store and append the genesis block.
    pub async fn bootstrapped() -> Self {
        let chain = Self::new();
        chain.initialize().await;
        chain
    }

    /// Rehydrate a store from an existing block sequence.
    ///
    /// No integrity checks are performed here; run the validator over the
    /// result to audit it.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self {
            inner: RwLock::new(blocks),
        }
    }

    /// Idempotent: appends the fixed genesis block if the store is empty.
    pub async fn initialize(&self) {
        let mut blocks = self.inner.write().unwrap();
        if blocks.is_empty() {
            let genesis = seal_and_push(&mut blocks, Block::genesis_shell());
            info!(digest = %genesis.digest.unwrap_or(BlockDigest::ZERO), "genesis block created");
        }
    }

    /// Seal an unsealed block and commit it, as one atomic step.
    ///
    /// Inside the critical section: link to the positional last element,
    /// assign `height = len`, stamp the time, compute the digest, push.
    /// Signals [`ChainError::AppendInconsistency`] if the height did not
    /// advance, which indicates a broken concurrency contract, not a
    /// routine condition.
    pub async fn append(&self, block: Block) -> Result<Block> {
        let mut blocks = self.inner.write().unwrap();
        let before = blocks.len();

        let sealed = seal_and_push(&mut blocks, block);

        if blocks.len() != before + 1 || sealed.height != before as u64 {
            return Err(ChainError::AppendInconsistency);
        }

        debug!(
            height = sealed.height,
            digest = %sealed.digest.unwrap_or(BlockDigest::ZERO),
            "block appended"
        );
        Ok(sealed)
    }

    /// Find a block by its digest. Absence is a reported condition.
    pub async fn get_by_digest(&self, digest: &BlockDigest) -> Result<Block> {
        let blocks = self.inner.read().unwrap();
        blocks
            .iter()
            .find(|b| b.digest.as_ref() == Some(digest))
            .cloned()
            .ok_or(ChainError::NotFound(*digest))
    }

    /// Get a block by height. Out of range is an absent value, not an
    /// error; this contract differs from [`Chain::get_by_digest`] on
    /// purpose, for caller convenience.
    pub async fn get_by_height(&self, height: u64) -> Option<Block> {
        let blocks = self.inner.read().unwrap();
        blocks.get(height as usize).cloned()
    }

    /// Current height: `len - 1`, or `-1` when empty.
    pub async fn height(&self) -> i64 {
        let blocks = self.inner.read().unwrap();
        blocks.len() as i64 - 1
    }

    /// Number of blocks in the store.
    pub async fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Whether the store holds no blocks (only before `initialize`).
    pub async fn is_empty(&self) -> bool {
        self.inner.read().unwrap().is_empty()
    }

    /// A stable snapshot of the whole sequence at call time.
    pub async fn blocks(&self) -> Vec<Block> {
        self.inner.read().unwrap().clone()
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

/// Seal a block against the current tail and push it. Caller holds the
/// write lock.
fn seal_and_push(blocks: &mut Vec<Block>, mut block: Block) -> Block {
    let previous_digest = blocks.last().and_then(|b| b.digest);
    block.seal(blocks.len() as u64, now_secs(), previous_digest);
    blocks.push(block.clone());
    block
}

/// Get current time in seconds since epoch.
fn now_secs() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_secs() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use star_ledger_core::{StarClaim, StarRecord};

    fn claim(owner: &str, story: &str) -> StarClaim {
        StarClaim {
            owner: owner.to_string(),
            star: StarRecord::new("16h 29m 1.0s", "-26° 29' 24.9\"", story),
        }
    }

    #[tokio::test]
    async fn test_fresh_store_height_is_minus_one() {
        let chain = Chain::new();
        assert_eq!(chain.height().await, -1);
        assert!(chain.is_empty().await);
    }

    #[tokio::test]
    async fn test_bootstrap_creates_genesis_only() {
        let chain = Chain::bootstrapped().await;
        assert_eq!(chain.height().await, 0);

        let genesis = chain.get_by_height(0).await.unwrap();
        assert!(genesis.is_genesis());
        assert!(genesis.validate());
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let chain = Chain::bootstrapped().await;
        let genesis = chain.get_by_height(0).await.unwrap();

        chain.initialize().await;
        assert_eq!(chain.height().await, 0);
        assert_eq!(chain.get_by_height(0).await.unwrap(), genesis);
    }

    #[tokio::test]
    async fn test_append_links_to_predecessor() {
        let chain = Chain::bootstrapped().await;
        let genesis = chain.get_by_height(0).await.unwrap();

        let block = Block::unsealed(&claim("addr1", "first")).unwrap();
        let sealed = chain.append(block).await.unwrap();

        assert_eq!(sealed.height, 1);
        assert_eq!(sealed.previous_digest, genesis.digest);
        assert!(sealed.validate());
        assert_eq!(chain.height().await, 1);
    }

    #[tokio::test]
    async fn test_append_returns_sealed_block() {
        let chain = Chain::bootstrapped().await;
        let sealed = chain
            .append(Block::unsealed(&claim("addr1", "a star")).unwrap())
            .await
            .unwrap();

        let stored = chain.get_by_height(1).await.unwrap();
        assert_eq!(sealed, stored);
        assert_eq!(stored.claim().unwrap().owner, "addr1");
    }

    #[tokio::test]
    async fn test_get_by_digest() {
        let chain = Chain::bootstrapped().await;
        let sealed = chain
            .append(Block::unsealed(&claim("addr1", "a star")).unwrap())
            .await
            .unwrap();

        let digest = sealed.digest.unwrap();
        let found = chain.get_by_digest(&digest).await.unwrap();
        assert_eq!(found, sealed);
    }

    #[tokio::test]
    async fn test_get_by_digest_not_found() {
        let chain = Chain::bootstrapped().await;
        let missing = BlockDigest::from_bytes([0xee; 32]);
        let result = chain.get_by_digest(&missing).await;
        assert!(matches!(result, Err(ChainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_by_height_out_of_range() {
        let chain = Chain::bootstrapped().await;
        assert!(chain.get_by_height(1).await.is_none());
        assert!(chain.get_by_height(999).await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_appends_do_not_collide() {
        use std::sync::Arc;

        let chain = Arc::new(Chain::bootstrapped().await);

        let mut handles = Vec::new();
        for i in 0..8 {
            let chain = Arc::clone(&chain);
            handles.push(tokio::spawn(async move {
                let block =
                    Block::unsealed(&claim(&format!("addr{i}"), &format!("star {i}"))).unwrap();
                chain.append(block).await.unwrap()
            }));
        }

        let mut heights = Vec::new();
        for handle in handles {
            heights.push(handle.await.unwrap().height);
        }
        heights.sort_unstable();
        assert_eq!(heights, (1..=8).collect::<Vec<u64>>());

        // Every link in the resulting chain is intact.
        let blocks = chain.blocks().await;
        for pair in blocks.windows(2) {
            assert_eq!(pair[1].previous_digest, pair[0].digest);
        }
    }
}
