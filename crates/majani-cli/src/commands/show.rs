// Rust guideline compliant 2026-10-12

//! Implementation of the `majani show` command.

use super::CommandContext;
use anyhow::Result;
use majani_app::{resolve_listing_id, view_listing};
use tracing::warn;

/// Opens a listing by full or partial ID.
///
/// Opening counts as a view and is recorded in the recently viewed history.
///
/// # Errors
///
/// Returns an error if the ID is unknown or ambiguous, or the catalog cannot be written.
pub fn execute(
    ctx: &CommandContext<'_>,
    id: String,
    lat: Option<f64>,
    lon: Option<f64>,
) -> Result<()> {
    let catalog = ctx.catalog()?;
    let storage = catalog.open_storage()?;
    let origin = ctx.origin(lat, lon)?;

    let listings = storage.load_all()?;
    let full_id = resolve_listing_id(&id, &listings)?;
    let listing = view_listing(&storage, &full_id)?;

    let mut recent = catalog.load_recent(ctx.config.recent_views_limit)?;
    recent.push(&listing.id);
    if let Err(e) = recent.save(catalog.recent_path()) {
        warn!(error = %e, "could not record recent view");
    }

    let distance = origin.distance_to(&listing.coordinate());
    println!("{}", ctx.formatter.format_listing(&listing, Some(distance)));
    Ok(())
}
