//! Ownership challenges.
//!
//! A challenge is a plain string the caller signs off-system to prove
//! control of a wallet address: `"<address>:<issued_at>:starRegistry"`.
//! The string is both the human-signable message and the self-contained
//! timing record; no server-side challenge table exists, the issuance time
//! is re-derived from the message itself at verification.

use crate::error::{RegistryError, Result};

/// Fixed protocol tag terminating every challenge message.
pub const CHALLENGE_TAG: &str = "starRegistry";

/// How long a challenge stays valid, in seconds.
pub const CHALLENGE_WINDOW_SECS: i64 = 300;

/// Issue a challenge for the given wallet address at the current time.
pub fn issue(address: &str) -> Result<String> {
    issue_at(address, now_secs())
}

/// Issue a challenge with an explicit issuance time.
pub fn issue_at(address: &str, issued_at: i64) -> Result<String> {
    if address.trim().is_empty() {
        return Err(RegistryError::EmptyAddress);
    }
    Ok(format!("{address}:{issued_at}:{CHALLENGE_TAG}"))
}

/// Whether an elapsed time falls outside the validity window.
///
/// The boundary itself is still valid: a challenge expires only strictly
/// after the window. A negative elapsed time (the issuer's clock ahead of
/// ours) is within the window.
pub fn window_expired(elapsed_secs: i64) -> bool {
    elapsed_secs > CHALLENGE_WINDOW_SECS
}

/// Parse the issuance time out of a challenge message (the second
/// colon-delimited field).
pub fn issued_at(message: &str) -> Result<i64> {
    let field = message
        .split(':')
        .nth(1)
        .ok_or_else(|| RegistryError::MalformedChallenge(message.to_string()))?;
    field
        .parse()
        .map_err(|_| RegistryError::MalformedChallenge(message.to_string()))
}

/// Get current time in seconds since epoch.
pub(crate) fn now_secs() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_secs() as i64
}
