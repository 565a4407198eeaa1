//! Credential expiry gate.
//!
//! Adapters consult this before any upstream call. A credential without an
//! expiry is never usable, and expiry is inclusive: a token whose expiry
//! equals the current second is already expired.

use chrono::{DateTime, Utc};

use crate::model::SourceCredential;

/// Returns `true` when `credential` may be used at instant `now`.
#[must_use]
pub fn is_usable(credential: &SourceCredential, now: DateTime<Utc>) -> bool {
    credential
        .expires_at_epoch_seconds
        .is_some_and(|expires_at| now.timestamp() < expires_at)
}

/// [`is_usable`] evaluated against the wall clock.
#[must_use]
pub fn is_usable_now(credential: &SourceCredential) -> bool {
    is_usable(credential, Utc::now())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::model::Platform;

    fn at(epoch: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(epoch, 0).unwrap()
    }

    fn credential(expires_at: Option<i64>) -> SourceCredential {
        SourceCredential::new(Platform::Twitter, "token", expires_at)
    }

    #[test]
    fn missing_expiry_is_not_usable() {
        assert!(!is_usable(&credential(None), at(0)));
    }

    #[test]
    fn future_expiry_is_usable() {
        assert!(is_usable(&credential(Some(1_000)), at(999)));
    }

    #[test]
    fn expiry_equal_to_now_is_expired() {
        assert!(!is_usable(&credential(Some(1_000)), at(1_000)));
    }

    #[test]
    fn past_expiry_is_not_usable() {
        assert!(!is_usable(&credential(Some(1_000)), at(5_000)));
    }

    #[test]
    fn sub_second_past_expiry_is_expired() {
        let now = at(1_000) + Duration::milliseconds(400);
        assert!(!is_usable(&credential(Some(1_000)), now));
    }

    #[test]
    fn wall_clock_gate_accepts_far_future_token() {
        let expires = Utc::now().timestamp() + 3_600;
        assert!(is_usable_now(&credential(Some(expires))));
    }
}
