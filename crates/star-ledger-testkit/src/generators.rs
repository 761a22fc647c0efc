//! Proptest strategies and sample data for ledger tests.

use proptest::prelude::*;

use star_ledger::{StarClaim, StarRecord};

/// A fixed, realistic star record with the given story.
pub fn sample_star(story: &str) -> StarRecord {
    StarRecord::new("16h 29m 1.0s", "-26° 29' 24.9\"", story)
}

/// Strategy producing arbitrary star records.
pub fn arb_star() -> impl Strategy<Value = StarRecord> {
    (
        "[0-9]{1,2}h [0-9]{1,2}m [0-9]{1,2}\\.[0-9]s",
        "-?[0-9]{1,2}° [0-9]{1,2}' [0-9]{1,2}\\.[0-9]\"",
        ".{0,120}",
        proptest::option::of("[0-9]\\.[0-9]"),
        proptest::option::of("[A-Z][a-z]{2}"),
    )
        .prop_map(|(ra, dec, story, magnitude, constellation)| StarRecord {
            ra,
            dec,
            story,
            magnitude,
            constellation,
        })
}

/// Strategy producing arbitrary owner-bound claims.
pub fn arb_claim() -> impl Strategy<Value = StarClaim> {
    ("[0-9a-f]{64}", arb_star()).prop_map(|(owner, star)| StarClaim { owner, star })
}

#[cfg(test)]
mod tests {
    use super::*;
    use star_ledger::Block;

    proptest! {
        #[test]
        fn prop_claim_encode_roundtrip(claim in arb_claim()) {
            let bytes = claim.encode().unwrap();
            let decoded = StarClaim::decode(&bytes).unwrap();
            prop_assert_eq!(claim, decoded);
        }

        #[test]
        fn prop_sealed_block_validates(claim in arb_claim(), height in 1u64..1_000_000, time in 0i64..4_000_000_000) {
            let mut block = Block::unsealed(&claim).unwrap();
            block.seal(height, time, Some(star_ledger::BlockDigest::from_bytes([0x1f; 32])));
            prop_assert!(block.validate());
            prop_assert_eq!(block.claim().unwrap(), claim);
        }
    }
}
