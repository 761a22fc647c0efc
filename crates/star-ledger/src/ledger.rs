//! The ledger facade: chain, validator, and registration protocol behind
//! one API, shaped for a presentation layer (HTTP/CLI) to consume.

use std::sync::Arc;

use tracing::warn;

use star_ledger_chain::{validate_chain, Chain, ChainFault};
use star_ledger_core::{Block, BlockDigest, StarClaim, StarRecord};
use star_ledger_registry::{Ed25519Verifier, OwnershipVerifier, StarRegistry};

use crate::error::Result;

/// The unified ledger: one chain store, one registration protocol.
pub struct StarLedger<V> {
    chain: Arc<Chain>,
    registry: StarRegistry<V>,
}

impl StarLedger<Ed25519Verifier> {
    /// Bootstrap a ledger with the production Ed25519 ownership verifier.
    pub async fn with_ed25519() -> Self {
        Self::bootstrap(Ed25519Verifier).await
    }
}

impl<V: OwnershipVerifier> StarLedger<V> {
    /// Create an initialized ledger: the genesis block exists before any
    /// other operation can observe the chain.
    pub async fn bootstrap(verifier: V) -> Self {
        let chain = Arc::new(Chain::bootstrapped().await);
        Self::with_chain(chain, verifier)
    }

    /// Wire a ledger around an existing chain store.
    pub fn with_chain(chain: Arc<Chain>, verifier: V) -> Self {
        let registry = StarRegistry::new(Arc::clone(&chain), verifier);
        Self { chain, registry }
    }

    /// Current chain height (0 for a fresh, genesis-only ledger).
    pub async fn get_chain_height(&self) -> i64 {
        self.chain.height().await
    }

    /// Issue a signable ownership challenge for a wallet address.
    pub fn request_challenge(&self, address: &str) -> Result<String> {
        Ok(self.registry.request_challenge(address)?)
    }

    /// Verify a signed challenge and commit the star as a new block.
    pub async fn submit_registration(
        &self,
        address: &str,
        message: &str,
        signature: &str,
        star: StarRecord,
    ) -> Result<Block> {
        Ok(self.registry.submit(address, message, signature, star).await?)
    }

    /// Look up a block by its digest.
    pub async fn get_block_by_digest(&self, digest: &BlockDigest) -> Result<Block> {
        Ok(self.chain.get_by_digest(digest).await?)
    }

    /// Look up a block by height; `None` when out of range.
    pub async fn get_block_by_height(&self, height: u64) -> Option<Block> {
        self.chain.get_by_height(height).await
    }

    /// All star claims registered to the given owner address.
    ///
    /// Genesis carries no claim and is skipped; a block whose body fails
    /// to decode is skipped with a warning rather than aborting the query.
    pub async fn get_stars_by_owner(&self, address: &str) -> Vec<StarClaim> {
        let mut stars = Vec::new();
        for block in self.chain.blocks().await {
            if block.is_genesis() {
                continue;
            }
            match block.claim() {
                Ok(claim) if claim.owner == address => stars.push(claim),
                Ok(_) => {}
                Err(e) => warn!(height = block.height, error = %e, "undecodable block body"),
            }
        }
        stars
    }

    /// Audit the whole chain; an empty report means it is consistent.
    pub async fn validate_chain(&self) -> Vec<ChainFault> {
        validate_chain(&self.chain).await
    }

    /// The underlying chain store.
    pub fn chain(&self) -> &Arc<Chain> {
        &self.chain
    }
}
