// Rust guideline compliant 2026-10-12

//! Implementation of the `majani recent` command.

use super::CommandContext;
use anyhow::Result;

/// Prints recently viewed listings, most recent first.
///
/// Listings removed from the catalog since they were viewed are skipped.
///
/// # Errors
///
/// Returns an error if the catalog or the history cannot be read.
pub fn execute(ctx: &CommandContext<'_>) -> Result<()> {
    let catalog = ctx.catalog()?;
    let listings = catalog.open_storage()?.load_all()?;
    let recent = catalog.load_recent(ctx.config.recent_views_limit)?;

    println!("{}", ctx.formatter.format_listings(&recent.resolve(&listings)));
    Ok(())
}
