// Rust guideline compliant 2026-10-12

//! Implementation of the `majani give` command.

use super::CommandContext;
use anyhow::Result;
use majani_app::{give_listing, resolve_listing_id};

/// Marks a listing as handed over. Only its owner may do this.
///
/// # Errors
///
/// Returns an error if `owner` does not own the listing or it was already given.
pub fn execute(ctx: &CommandContext<'_>, id: String, owner: String) -> Result<()> {
    let catalog = ctx.catalog()?;
    let storage = catalog.open_storage()?;

    let full_id = resolve_listing_id(&id, &storage.load_all()?)?;
    let listing = give_listing(&storage, &full_id, &owner)?;

    ctx.success(&format!("Marked {} as given", listing.id));
    println!("{}", ctx.formatter.format_listing(&listing, None));
    Ok(())
}
