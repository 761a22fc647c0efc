//! The star registration protocol.
//!
//! Challenge/submit cycle: a caller requests a challenge, signs it with
//! their wallet key off-system, and submits the signature together with the
//! star data. A successful submission grows the chain by exactly one block;
//! any failure leaves it unchanged.

use std::sync::Arc;

use tracing::{debug, info};

use star_ledger_chain::{validate_chain, Chain};
use star_ledger_core::{Block, StarClaim, StarRecord};

use crate::challenge;
use crate::error::{RegistryError, Result};
use crate::verify::OwnershipVerifier;

/// The registration protocol, bound to one chain store and one
/// signature-verification capability.
pub struct StarRegistry<V> {
    chain: Arc<Chain>,
    verifier: V,
}

impl<V: OwnershipVerifier> StarRegistry<V> {
    /// Bind the protocol to a chain and a verifier.
    pub fn new(chain: Arc<Chain>, verifier: V) -> Self {
        Self { chain, verifier }
    }

    /// Issue a signable ownership challenge for the given address.
    pub fn request_challenge(&self, address: &str) -> Result<String> {
        let message = challenge::issue(address)?;
        debug!(address, "challenge issued");
        Ok(message)
    }

    /// Verify a signed challenge and commit the star to the chain.
    ///
    /// The chain is audited first: writes into a chain already known to be
    /// corrupt are rejected outright. The signature verification await
    /// happens outside any chain lock; only the final append takes the
    /// critical section.
    pub async fn submit(
        &self,
        address: &str,
        message: &str,
        signature: &str,
        star: StarRecord,
    ) -> Result<Block> {
        let faults = validate_chain(&self.chain).await;
        if !faults.is_empty() {
            return Err(RegistryError::ChainCorrupt(faults));
        }

        let issued_at = challenge::issued_at(message)?;
        // The issuance time is caller-supplied; an extreme value that would
        // overflow the subtraction is a forged message, not a timing result.
        let elapsed_secs = challenge::now_secs()
            .checked_sub(issued_at)
            .ok_or_else(|| RegistryError::MalformedChallenge(message.to_string()))?;
        if challenge::window_expired(elapsed_secs) {
            debug!(address, elapsed_secs, "challenge expired");
            return Err(RegistryError::ChallengeExpired { elapsed_secs });
        }

        if !self.verifier.verify(message, address, signature).await {
            return Err(RegistryError::OwnershipNotVerified);
        }

        let claim = StarClaim {
            owner: address.to_string(),
            star,
        };
        let block = Block::unsealed(&claim)?;
        let sealed = self.chain.append(block).await?;

        info!(address, height = sealed.height, "star registered");
        Ok(sealed)
    }

    /// The chain this registry writes to.
    pub fn chain(&self) -> &Arc<Chain> {
        &self.chain
    }
}
