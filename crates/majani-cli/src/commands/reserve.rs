// Rust guideline compliant 2026-10-12

//! Implementation of the `majani reserve` command.

use super::CommandContext;
use anyhow::Result;
use majani_app::{reserve_listing, resolve_listing_id};

/// Reserves an available listing for `requester`.
///
/// # Errors
///
/// Returns an error if the requester owns the listing or it is not available.
pub fn execute(ctx: &CommandContext<'_>, id: String, requester: String) -> Result<()> {
    let catalog = ctx.catalog()?;
    let storage = catalog.open_storage()?;

    let full_id = resolve_listing_id(&id, &storage.load_all()?)?;
    let listing = reserve_listing(&storage, &full_id, &requester)?;

    ctx.success(&format!("Reserved {}", listing.id));
    println!("{}", ctx.formatter.format_listing(&listing, None));
    Ok(())
}
