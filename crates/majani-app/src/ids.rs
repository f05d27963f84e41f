// Rust guideline compliant 2026-10-12

//! ID resolution helpers for Majani.

use crate::error::Result;
use majani_core::identity::{self, LISTING_PREFIX};
use majani_core::Listing;

/// Resolves a partial listing ID to its canonical full ID.
///
/// # Arguments
///
/// * `partial` - Partial or full listing ID, with or without the `lst-` prefix
/// * `listings` - Listings to match against
///
/// # Returns
///
/// The canonical listing ID.
///
/// # Errors
///
/// Returns an error if the partial ID is ambiguous or not found.
pub fn resolve_listing_id(partial: &str, listings: &[Listing]) -> Result<String> {
    Ok(identity::resolve_partial_id(
        partial,
        LISTING_PREFIX,
        listings.iter().map(|l| l.id.as_str()),
    )?)
}
