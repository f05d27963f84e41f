// Rust guideline compliant 2026-10-12

//! Implementation of the `majani init` command.

use super::CommandContext;
use anyhow::Result;
use majani_app::{demo_listings, CatalogContext};
use tracing::info;

/// Creates the `.majani` catalog, optionally filling it with demo listings.
///
/// Seeding only writes to an empty catalog.
///
/// # Errors
///
/// Returns an error if the catalog cannot be created or written.
pub fn execute(ctx: &CommandContext<'_>, seed: bool) -> Result<()> {
    let catalog = CatalogContext::init(ctx.root.as_deref())?;
    let path = catalog.majani_dir().display().to_string();

    if !seed {
        ctx.success(&format!("Initialized Majani catalog at {}", path));
        println!("{}", ctx.formatter.format_message(&path));
        return Ok(());
    }

    let storage = catalog.open_storage()?;
    let seeded = storage.rewrite(|listings| {
        if !listings.is_empty() {
            return Ok(0);
        }
        *listings = demo_listings(ctx.now);
        Ok(listings.len())
    })?;

    if seeded == 0 {
        if !ctx.json {
            crate::terminal::print_warning(
                "Catalog already has listings, skipping demo data",
                ctx.use_color,
            );
        }
    } else {
        info!(count = seeded, "seeded demo listings");
        ctx.success(&format!(
            "Initialized Majani catalog at {} with {} demo listings",
            path, seeded
        ));
    }
    println!("{}", ctx.formatter.format_message(&path));
    Ok(())
}
