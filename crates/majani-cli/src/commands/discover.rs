// Rust guideline compliant 2026-10-12

//! Implementation of the `majani discover` command.

use super::CommandContext;
use anyhow::Result;
use majani_app::{discover_hits, parse_category, parse_sort, DiscoveryCriteria};
use tracing::debug;

/// Arguments of `majani discover`.
#[derive(Debug, Clone, Default)]
pub struct DiscoverArgs {
    pub category: Option<String>,
    pub max_distance: Option<f64>,
    pub query: Option<String>,
    pub sort: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Filters and sorts the catalog around the caller's position.
///
/// # Errors
///
/// Returns an error if:
/// - A filter value is invalid
/// - The catalog cannot be read
pub fn execute(ctx: &CommandContext<'_>, args: DiscoverArgs) -> Result<()> {
    let catalog = ctx.catalog()?;
    let storage = catalog.open_storage()?;
    let origin = ctx.origin(args.lat, args.lon)?;

    let criteria = DiscoveryCriteria {
        category: match args.category.as_deref() {
            Some(value) => parse_category(value)?,
            None => Default::default(),
        },
        max_distance_km: args.max_distance,
        query: args.query.unwrap_or_default(),
        sort: match args.sort.as_deref() {
            Some(value) => parse_sort(value)?,
            None => ctx.config.default_sort,
        },
    };
    criteria.validate()?;

    let listings = storage.load_all()?;
    let hits = discover_hits(&listings, &criteria, origin);
    debug!(total = listings.len(), hits = hits.len(), "discovery finished");

    println!("{}", ctx.formatter.format_hits(&hits));
    Ok(())
}
