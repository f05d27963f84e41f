// Rust guideline compliant 2026-10-12

//! Hash-based identifiers and partial ID resolution.

use crate::{Error, Result};
use sha2::{Digest, Sha256};

/// Prefix of listing IDs.
pub const LISTING_PREFIX: &str = "lst";

/// Prefix of user IDs.
pub const USER_PREFIX: &str = "usr";

/// Number of hex characters in a freshly generated ID.
const HASH_LEN: usize = 6;

/// Generates a hash-based ID of the form `<prefix>-XXXXXX`.
///
/// # Arguments
///
/// * `prefix` - ID namespace, e.g. [`LISTING_PREFIX`]
/// * `parts` - Content hashed into the ID
/// * `timestamp` - Creation time, any resolution
/// * `nonce` - Disambiguator for collisions
pub fn generate_id(prefix: &str, parts: &[&str], timestamp: i64, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
        hasher.update([0u8]);
    }
    hasher.update(timestamp.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hex = format!("{:x}", hasher.finalize());
    format!("{}-{}", prefix, &hex[..HASH_LEN])
}

/// Validates that `id` is `<prefix>-` followed by 6 to 8 lowercase hex digits.
///
/// # Errors
///
/// Returns an error if the prefix or the hash part is malformed.
pub fn validate_id_format(id: &str, prefix: &str) -> Result<()> {
    let hash = id
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .ok_or_else(|| {
            Error::InvalidId(format!("ID '{}' must start with '{}-'", id, prefix))
        })?;

    let valid_len = (HASH_LEN..=8).contains(&hash.len());
    let valid_chars = hash
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));

    if !valid_len || !valid_chars {
        return Err(Error::InvalidId(format!(
            "ID '{}' must end in 6-8 lowercase hex characters",
            id
        )));
    }

    Ok(())
}

/// Resolves a partial ID against a set of known IDs.
///
/// An exact match always wins. Otherwise the partial is treated as a
/// prefix; the leading `<prefix>-` may be omitted.
///
/// # Arguments
///
/// * `partial` - Full or partial ID
/// * `prefix` - ID namespace used when the partial omits it
/// * `ids` - Known IDs
///
/// # Errors
///
/// Returns an error if nothing matches or more than one ID matches.
pub fn resolve_partial_id<'a, I>(partial: &str, prefix: &str, ids: I) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let partial = partial.trim().to_ascii_lowercase();
    if partial.is_empty() {
        return Err(Error::NotFound("empty ID".to_string()));
    }

    let needle = if partial.starts_with(&format!("{}-", prefix)) {
        partial.clone()
    } else {
        format!("{}-{}", prefix, partial)
    };

    let mut matches: Vec<String> = Vec::new();
    for id in ids {
        if id == partial || id == needle {
            return Ok(id.to_string());
        }
        if id.starts_with(&needle) {
            matches.push(id.to_string());
        }
    }

    match matches.len() {
        0 => Err(Error::NotFound(partial)),
        1 => Ok(matches.remove(0)),
        _ => {
            matches.sort();
            Err(Error::AmbiguousId(partial, matches))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_is_valid() {
        let id = generate_id(LISTING_PREFIX, &["Old chair", "usr-abc123"], 1_700_000_000, 0);
        assert!(id.starts_with("lst-"));
        validate_id_format(&id, LISTING_PREFIX).unwrap();
    }

    #[test]
    fn test_nonce_changes_id() {
        let a = generate_id(USER_PREFIX, &["09123456789"], 1, 0);
        let b = generate_id(USER_PREFIX, &["09123456789"], 1, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_rejects_wrong_prefix_and_case() {
        assert!(validate_id_format("usr-abc123", LISTING_PREFIX).is_err());
        assert!(validate_id_format("lst-ABC123", LISTING_PREFIX).is_err());
        assert!(validate_id_format("lst-abc", LISTING_PREFIX).is_err());
    }

    #[test]
    fn test_resolve_without_prefix() {
        let ids = ["lst-abc123", "lst-def456"];
        let resolved = resolve_partial_id("abc", LISTING_PREFIX, ids).unwrap();
        assert_eq!(resolved, "lst-abc123");
    }

    #[test]
    fn test_resolve_ambiguous() {
        let ids = ["lst-abc123", "lst-abd456"];
        let err = resolve_partial_id("lst-ab", LISTING_PREFIX, ids).unwrap_err();
        assert!(matches!(err, Error::AmbiguousId(_, ref m) if m.len() == 2));
    }

    #[test]
    fn test_resolve_not_found() {
        let ids = ["lst-abc123"];
        assert!(matches!(
            resolve_partial_id("fff", LISTING_PREFIX, ids),
            Err(Error::NotFound(_))
        ));
    }
}
