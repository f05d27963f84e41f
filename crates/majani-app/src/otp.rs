// Rust guideline compliant 2026-10-12

//! One-time login codes.
//!
//! A code is four digits, lives for a configurable time and is bound to a
//! phone number. The code handed to the user is the code that is checked.

use crate::error::Result;
use chrono::{DateTime, Duration, Utc};
use majani_core::Config;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Upper bound on code lifetime, one day.
const MAX_TTL_SECS: u64 = 86_400;

/// A pending one-time code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Phone the code was sent to.
    pub phone: String,
    /// The four-digit code.
    pub code: String,
    /// Instant after which the code is rejected.
    pub expires_at: DateTime<Utc>,
    /// Wrong guesses against this code so far.
    pub failed_attempts: u32,
}

impl OtpRecord {
    /// Returns true while the code can still be verified.
    #[must_use]
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        now <= self.expires_at
    }
}

/// Lifetime and attempt limits for one-time codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpPolicy {
    /// How long a code stays valid.
    pub ttl: Duration,
    /// Wrong guesses allowed before the live code is locked.
    pub max_attempts: u32,
}

impl Default for OtpPolicy {
    fn default() -> Self {
        Self {
            ttl: Duration::seconds(120),
            max_attempts: 3,
        }
    }
}

impl OtpPolicy {
    /// Builds a policy from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            ttl: Duration::seconds(config.otp_ttl_secs.min(MAX_TTL_SECS) as i64),
            max_attempts: config.otp_max_attempts,
        }
    }
}

/// Storage for pending codes, one per phone.
pub trait OtpStore {
    /// Returns the pending code for `phone`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn find_by_phone(&self, phone: &str) -> Result<Option<OtpRecord>>;

    /// Inserts or replaces the pending code for the record's phone.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn upsert(&mut self, record: OtpRecord) -> Result<()>;

    /// Drops the pending code for `phone`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn remove(&mut self, phone: &str) -> Result<()>;
}

/// Process-local code store.
#[derive(Debug, Default)]
pub struct InMemoryOtpStore {
    records: HashMap<String, OtpRecord>,
}

impl InMemoryOtpStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OtpStore for InMemoryOtpStore {
    fn find_by_phone(&self, phone: &str) -> Result<Option<OtpRecord>> {
        Ok(self.records.get(phone).cloned())
    }

    fn upsert(&mut self, record: OtpRecord) -> Result<()> {
        self.records.insert(record.phone.clone(), record);
        Ok(())
    }

    fn remove(&mut self, phone: &str) -> Result<()> {
        self.records.remove(phone);
        Ok(())
    }
}

/// Draws a four-digit code in `1000..=9999`.
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.gen_range(1000..=9999u32).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_codes_are_four_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let code = generate_code(&mut rng);
            assert_eq!(code.len(), 4);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            assert!(!code.starts_with('0'));
        }
    }

    #[test]
    fn test_record_liveness_boundary() {
        let issued = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
        let record = OtpRecord {
            phone: "09123456789".to_string(),
            code: "4821".to_string(),
            expires_at: issued + Duration::seconds(120),
            failed_attempts: 0,
        };
        assert!(record.is_live(issued + Duration::seconds(120)));
        assert!(!record.is_live(issued + Duration::seconds(121)));
    }

    #[test]
    fn test_policy_from_config() {
        let config = Config {
            otp_ttl_secs: 60,
            otp_max_attempts: 5,
            ..Config::default()
        };
        let policy = OtpPolicy::from_config(&config);
        assert_eq!(policy.ttl, Duration::seconds(60));
        assert_eq!(policy.max_attempts, 5);
    }

    #[test]
    fn test_in_memory_store_replaces_per_phone() {
        let mut store = InMemoryOtpStore::new();
        let expires_at = Utc.with_ymd_and_hms(2026, 10, 17, 12, 2, 0).unwrap();
        for code in ["1111", "2222"] {
            store
                .upsert(OtpRecord {
                    phone: "09123456789".to_string(),
                    code: code.to_string(),
                    expires_at,
                    failed_attempts: 0,
                })
                .unwrap();
        }
        let found = store.find_by_phone("09123456789").unwrap().unwrap();
        assert_eq!(found.code, "2222");

        store.remove("09123456789").unwrap();
        assert!(store.find_by_phone("09123456789").unwrap().is_none());
    }
}
