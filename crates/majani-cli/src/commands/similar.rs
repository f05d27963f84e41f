// Rust guideline compliant 2026-10-12

//! Implementation of the `majani similar` command.

use super::CommandContext;
use anyhow::Result;
use majani_app::{resolve_listing_id, similar_listings};
use majani_core::Error;

/// Lists other listings in the same category as the given one.
///
/// # Errors
///
/// Returns an error if the ID is unknown or ambiguous.
pub fn execute(ctx: &CommandContext<'_>, id: String, limit: Option<usize>) -> Result<()> {
    let catalog = ctx.catalog()?;
    let listings = catalog.open_storage()?.load_all()?;

    let full_id = resolve_listing_id(&id, &listings)?;
    let target = listings
        .iter()
        .find(|l| l.id == full_id)
        .ok_or_else(|| Error::NotFound(full_id.clone()))?;

    let mut similar = similar_listings(&listings, target);
    if let Some(limit) = limit {
        similar.truncate(limit);
    }

    println!("{}", ctx.formatter.format_listings(&similar));
    Ok(())
}
