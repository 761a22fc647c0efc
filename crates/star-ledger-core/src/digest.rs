//! Block digests: Blake3 hashes behind a strong type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte block digest, computed as Blake3 over the canonical seal bytes.
///
/// The digest both detects tampering of a single block and links a block to
/// its successor (the successor stores it as `previous_digest`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockDigest(pub [u8; 32]);

impl BlockDigest {
    /// Compute the Blake3 digest of the given bytes.
    pub fn hash(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The zero digest, used as a display sentinel for "no predecessor".
    pub const ZERO: Self = Self([0u8; 32]);
}

impl fmt::Debug for BlockDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockDigest({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for BlockDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_deterministic() {
        let d1 = BlockDigest::hash(b"some block bytes");
        let d2 = BlockDigest::hash(b"some block bytes");
        assert_eq!(d1, d2);

        let d3 = BlockDigest::hash(b"other block bytes");
        assert_ne!(d1, d3);
    }

    #[test]
    fn test_digest_display() {
        let digest = BlockDigest::from_bytes([0xab; 32]);
        assert_eq!(format!("{}", digest), "abababababababab");
    }
}
