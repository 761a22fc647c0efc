//! The external signature-verification capability.
//!
//! The registry treats signature cryptography as an opaque capability: any
//! non-true outcome, including a provider error, counts as "not verified".
//! The production implementation verifies Ed25519 detached signatures where
//! the wallet address is the hex-encoded public key.

use async_trait::async_trait;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use tracing::debug;

/// Verifies that `signature` over `message` was produced by the holder of
/// `address`.
#[async_trait]
pub trait OwnershipVerifier: Send + Sync {
    async fn verify(&self, message: &str, address: &str, signature: &str) -> bool;
}

/// Ed25519 verifier: `address` is a hex-encoded 32-byte public key,
/// `signature` a hex-encoded 64-byte detached signature over the raw
/// message bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Verifier;

#[async_trait]
impl OwnershipVerifier for Ed25519Verifier {
    async fn verify(&self, message: &str, address: &str, signature: &str) -> bool {
        let Some(key) = decode_key(address) else {
            debug!(address, "ownership check failed: bad public key");
            return false;
        };
        let Some(sig) = decode_signature(signature) else {
            debug!(address, "ownership check failed: bad signature encoding");
            return false;
        };
        key.verify(message.as_bytes(), &sig).is_ok()
    }
}

fn decode_key(address: &str) -> Option<VerifyingKey> {
    let bytes: [u8; 32] = hex::decode(address).ok()?.try_into().ok()?;
    VerifyingKey::from_bytes(&bytes).ok()
}

fn decode_signature(signature: &str) -> Option<Signature> {
    let bytes: [u8; 64] = hex::decode(signature).ok()?.try_into().ok()?;
    Some(Signature::from_bytes(&bytes))
}
