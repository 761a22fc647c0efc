//! Block payloads: star records and their owner binding.
//!
//! Payloads are stored inside blocks as opaque CBOR bytes. The chain never
//! interprets them; only `Block::claim` decodes them back.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Marker body of the genesis block.
pub const GENESIS_MARKER: &str = "First block in the chain - Genesis block";

/// Astronomical coordinates and story for a registered star.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRecord {
    /// Right ascension, e.g. "16h 29m 1.0s".
    pub ra: String,

    /// Declination, e.g. "-26° 29' 24.9\"".
    pub dec: String,

    /// Free-text ownership story. Opaque here; callers may hex-encode it.
    pub story: String,

    /// Apparent magnitude, if claimed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<String>,

    /// Constellation, if claimed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constellation: Option<String>,
}

impl StarRecord {
    /// Minimal record with only the required coordinates and story.
    pub fn new(ra: impl Into<String>, dec: impl Into<String>, story: impl Into<String>) -> Self {
        Self {
            ra: ra.into(),
            dec: dec.into(),
            story: story.into(),
            magnitude: None,
            constellation: None,
        }
    }
}

/// A star bound to its wallet-address owner. This is what a registered
/// block carries as its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarClaim {
    /// The wallet address that proved ownership of the challenge.
    pub owner: String,

    /// The claimed star.
    pub star: StarRecord,
}

impl StarClaim {
    /// Encode the claim into opaque block body bytes.
    pub fn encode(&self) -> Result<Bytes> {
        let mut buf = Vec::new();
        ciborium::into_writer(self, &mut buf).map_err(|e| CoreError::Encode(e.to_string()))?;
        Ok(buf.into())
    }

    /// Decode a claim from block body bytes.
    pub fn decode(body: &[u8]) -> Result<Self> {
        ciborium::from_reader(body).map_err(|e| CoreError::Decode(e.to_string()))
    }
}
