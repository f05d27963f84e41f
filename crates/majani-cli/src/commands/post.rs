// Rust guideline compliant 2026-10-12

//! Implementation of the `majani post` command.

use super::CommandContext;
use anyhow::Result;
use majani_app::{parse_category, post_listing, AppError, CategoryFilter};
use majani_core::{Condition, ListingDraft, Location};

/// Arguments of `majani post`.
#[derive(Debug, Clone, Default)]
pub struct PostArgs {
    pub owner: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub condition: String,
    pub images: Vec<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub address: Option<String>,
    pub city: Option<String>,
}

/// Default city label for new listings.
const DEFAULT_CITY: &str = "تهران";

/// Posts a new listing and prints it.
///
/// # Errors
///
/// Returns an error if:
/// - The category or condition is unknown
/// - The listing fails validation
/// - The catalog cannot be written
pub fn execute(ctx: &CommandContext<'_>, args: PostArgs) -> Result<()> {
    let catalog = ctx.catalog()?;
    let storage = catalog.open_storage()?;

    let category = match parse_category(&args.category)? {
        CategoryFilter::Only(category) => category,
        CategoryFilter::All => {
            return Err(AppError::InvalidInput(
                "A listing needs a concrete category, not 'all'".to_string(),
            )
            .into())
        }
    };
    let condition = parse_condition(&args.condition)?;

    let coordinate = ctx.origin(args.lat, args.lon)?;
    let mut location = Location::new(coordinate.lat, coordinate.lon);
    if let Some(address) = args.address {
        location = location.with_address(address);
    }

    let draft = ListingDraft {
        owner_id: args.owner,
        title: args.title,
        description: args.description.unwrap_or_default(),
        images: args.images,
        category,
        condition,
        location,
        city: args.city.unwrap_or_else(|| DEFAULT_CITY.to_string()),
    };

    let listing = post_listing(&storage, draft, &ctx.config.limits(), ctx.now)?;
    ctx.success(&format!("Posted {}", listing.id));
    println!("{}", ctx.formatter.format_listing(&listing, None));
    Ok(())
}

/// Parses a condition tag such as `almost_new` or `almost-new`.
///
/// # Errors
///
/// Returns an error if the value names no condition.
pub fn parse_condition(value: &str) -> Result<Condition, AppError> {
    match value.trim().to_lowercase().replace('-', "_").as_str() {
        "new" => Ok(Condition::New),
        "almost_new" => Ok(Condition::AlmostNew),
        "used" => Ok(Condition::Used),
        "needs_repair" => Ok(Condition::NeedsRepair),
        _ => Err(AppError::InvalidInput(format!(
            "Invalid condition: {}",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_condition_accepts_hyphens() {
        assert_eq!(parse_condition("almost-new").unwrap(), Condition::AlmostNew);
        assert_eq!(parse_condition("NEEDS_REPAIR").unwrap(), Condition::NeedsRepair);
        assert!(parse_condition("broken").is_err());
    }
}
