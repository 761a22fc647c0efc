//! Block: one entry in the append-only ledger.
//!
//! Blocks have a two-phase lifecycle: construction produces an unsealed
//! shell carrying only the encoded body; the chain store later seals it by
//! assigning height, timestamp, predecessor link, and digest. Once sealed
//! and stored, a block is never mutated.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::canonical::seal_bytes;
use crate::digest::BlockDigest;
use crate::error::{CoreError, Result};
use crate::payload::{StarClaim, GENESIS_MARKER};

/// One entry in the ledger.
///
/// `digest` is a pure function of the other four fields; `previous_digest`
/// is `None` only for the genesis block. Both are `None` on an unsealed
/// shell, which no reader of the chain ever observes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the chain; 0 for genesis, assigned at seal time.
    pub height: u64,

    /// Opaque encoded body (a [`StarClaim`], or the genesis marker).
    pub body: Bytes,

    /// Seal timestamp, Unix seconds. Assigned at seal time.
    pub time: i64,

    /// Digest of the predecessor block; `None` for genesis.
    pub previous_digest: Option<BlockDigest>,

    /// Digest over the canonical encoding of the other four fields.
    pub digest: Option<BlockDigest>,
}

impl Block {
    /// Construct an unsealed block carrying the given claim.
    ///
    /// The body is encoded immediately; height, time, and both digests are
    /// filled in by the chain store at append time.
    pub fn unsealed(claim: &StarClaim) -> Result<Self> {
        Ok(Self::shell(claim.encode()?))
    }

    /// The unsealed genesis block. Its body is the fixed marker, not a claim.
    pub fn genesis_shell() -> Self {
        Self::shell(Bytes::from_static(GENESIS_MARKER.as_bytes()))
    }

    fn shell(body: Bytes) -> Self {
        Self {
            height: 0,
            body,
            time: 0,
            previous_digest: None,
            digest: None,
        }
    }

    /// Seal the block: assign linkage fields and compute the digest.
    ///
    /// Only the chain store calls this, inside its append critical section.
    pub fn seal(&mut self, height: u64, time: i64, previous_digest: Option<BlockDigest>) {
        self.height = height;
        self.time = time;
        self.previous_digest = previous_digest;
        self.digest = Some(self.recompute_digest());
    }

    /// Recompute the digest from the current stored fields into a fresh
    /// value, treating the digest field as absent. Never mutates the block.
    pub fn recompute_digest(&self) -> BlockDigest {
        BlockDigest::hash(&seal_bytes(
            self.height,
            &self.body,
            self.time,
            self.previous_digest.as_ref(),
        ))
    }

    /// Check integrity: the stored digest must match a recomputation over
    /// the stored fields. An unsealed block is not valid.
    pub fn validate(&self) -> bool {
        match self.digest {
            Some(stored) => stored == self.recompute_digest(),
            None => false,
        }
    }

    /// Whether this is the sealed genesis block.
    pub fn is_genesis(&self) -> bool {
        self.height == 0 && self.previous_digest.is_none() && self.digest.is_some()
    }

    /// Decode the star claim carried by a sealed, non-genesis block.
    ///
    /// The genesis block carries only the marker and yields
    /// [`CoreError::GenesisHasNoPayload`] rather than a valid-looking claim.
    pub fn claim(&self) -> Result<StarClaim> {
        if self.height == 0 {
            return Err(CoreError::GenesisHasNoPayload);
        }
        StarClaim::decode(&self.body)
    }
}
