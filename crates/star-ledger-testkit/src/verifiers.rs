//! Test doubles for the ownership-verification capability.

use async_trait::async_trait;

use star_ledger::OwnershipVerifier;

/// Approves every submission without looking at the signature.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproveAll;

#[async_trait]
impl OwnershipVerifier for ApproveAll {
    async fn verify(&self, _message: &str, _address: &str, _signature: &str) -> bool {
        true
    }
}

/// Rejects every submission.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectAll;

#[async_trait]
impl OwnershipVerifier for RejectAll {
    async fn verify(&self, _message: &str, _address: &str, _signature: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::sample_star;
    use star_ledger::{LedgerError, RegistryError, StarLedger};

    #[tokio::test]
    async fn test_approve_all_skips_signature_checks() {
        let ledger = StarLedger::bootstrap(ApproveAll).await;
        let message = ledger.request_challenge("any-address").unwrap();

        let block = ledger
            .submit_registration("any-address", &message, "not-a-signature", sample_star("x"))
            .await
            .unwrap();
        assert_eq!(block.height, 1);
    }

    #[tokio::test]
    async fn test_reject_all_never_commits() {
        let ledger = StarLedger::bootstrap(RejectAll).await;
        let message = ledger.request_challenge("any-address").unwrap();

        let result = ledger
            .submit_registration("any-address", &message, "sig", sample_star("x"))
            .await;
        assert!(matches!(
            result,
            Err(LedgerError::Registry(RegistryError::OwnershipNotVerified))
        ));
        assert_eq!(ledger.get_chain_height().await, 0);
    }
}
