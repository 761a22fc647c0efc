//! Test fixtures and helpers.
//!
//! Common setup code for integration tests. Wallet key material lives here
//! and only here: the production crates verify signatures, they never hold
//! keys.

use ed25519_dalek::{Signer, SigningKey};

use star_ledger::{Block, Ed25519Verifier, StarLedger, StarRecord};

/// A wallet keypair: the off-system signer of ownership challenges.
pub struct WalletFixture {
    key: SigningKey,
}

impl WalletFixture {
    /// Create a wallet with a random key.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            key: SigningKey::generate(&mut rng),
        }
    }

    /// Create a wallet with a deterministic key from a seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            key: SigningKey::from_bytes(&seed),
        }
    }

    /// The wallet address: the hex-encoded public key.
    pub fn address(&self) -> String {
        hex::encode(self.key.verifying_key().to_bytes())
    }

    /// Sign a challenge message, returning the hex-encoded signature.
    pub fn sign(&self, message: &str) -> String {
        hex::encode(self.key.sign(message.as_bytes()).to_bytes())
    }
}

impl Default for WalletFixture {
    fn default() -> Self {
        Self::generate()
    }
}

/// A bootstrapped ledger with the production Ed25519 verifier.
pub struct LedgerFixture {
    pub ledger: StarLedger<Ed25519Verifier>,
}

impl LedgerFixture {
    /// Bootstrap a fresh ledger (genesis block included).
    pub async fn new() -> Self {
        Self {
            ledger: StarLedger::with_ed25519().await,
        }
    }

    /// Run the full challenge/sign/submit cycle for one star.
    pub async fn register(&self, wallet: &WalletFixture, star: StarRecord) -> Block {
        let address = wallet.address();
        let message = self
            .ledger
            .request_challenge(&address)
            .expect("challenge issuance");
        let signature = wallet.sign(&message);
        self.ledger
            .submit_registration(&address, &message, &signature, star)
            .await
            .expect("registration")
    }
}

/// Create multiple wallets with distinct deterministic keys.
pub fn wallets(count: usize) -> Vec<WalletFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            seed[31] = 0x5a;
            WalletFixture::from_seed(seed)
        })
        .collect()
}
