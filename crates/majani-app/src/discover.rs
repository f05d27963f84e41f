// Rust guideline compliant 2026-10-12

//! Listing discovery: category, radius and text filters followed by a
//! recency or proximity sort.
//!
//! Discovery borrows the caller's listings and returns references into
//! them. Nothing is copied or mutated, and there is no error path: bad
//! coordinates are rejected when listings are written.

use crate::error::{AppError, Result};
use majani_core::{Category, Coordinate, Listing, SortOrder};
use rayon::prelude::*;
use serde::Serialize;

/// Above this many listings the filter pass runs on the rayon pool.
const PARALLEL_THRESHOLD: usize = 1_000;

/// Category part of the discovery criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every category matches.
    #[default]
    All,
    /// Only the given category matches.
    Only(Category),
}

impl CategoryFilter {
    /// Returns true if `category` passes the filter.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

/// Criteria for a single discovery query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveryCriteria {
    /// Category filter.
    pub category: CategoryFilter,
    /// Maximum distance from the origin in kilometers, if any.
    pub max_distance_km: Option<f64>,
    /// Case-sensitive literal searched in title and description.
    /// Empty matches everything.
    pub query: String,
    /// Result order.
    pub sort: SortOrder,
}

impl DiscoveryCriteria {
    /// Checks that the distance cap, when set, is a non-negative number.
    ///
    /// # Errors
    ///
    /// Returns an error if the cap is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if let Some(max) = self.max_distance_km {
            if !max.is_finite() || max < 0.0 {
                return Err(AppError::InvalidInput(format!(
                    "Max distance must be a non-negative number of km, got {}",
                    max
                )));
            }
        }
        Ok(())
    }
}

/// A discovered listing along with its distance from the query origin.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DiscoveryHit<'a> {
    /// The matching listing.
    pub listing: &'a Listing,
    /// Great-circle distance from the origin in kilometers.
    pub distance_km: f64,
}

/// Runs the discovery pipeline and returns matching listings in order.
///
/// # Arguments
///
/// * `listings` - Catalog snapshot
/// * `criteria` - Filters and sort order
/// * `origin` - Caller position used for distance filtering and sorting
///
/// # Returns
///
/// References to the listings that pass every filter, stably sorted.
#[must_use]
pub fn discover<'a>(
    listings: &'a [Listing],
    criteria: &DiscoveryCriteria,
    origin: Coordinate,
) -> Vec<&'a Listing> {
    discover_hits(listings, criteria, origin)
        .into_iter()
        .map(|hit| hit.listing)
        .collect()
}

/// Same as [`discover`], keeping the computed distance of every hit.
#[must_use]
pub fn discover_hits<'a>(
    listings: &'a [Listing],
    criteria: &DiscoveryCriteria,
    origin: Coordinate,
) -> Vec<DiscoveryHit<'a>> {
    let to_hit = |listing: &'a Listing| {
        let hit = DiscoveryHit {
            listing,
            distance_km: origin.distance_to(&listing.coordinate()),
        };
        keep(&hit, criteria).then_some(hit)
    };

    let mut hits: Vec<DiscoveryHit<'a>> = if listings.len() >= PARALLEL_THRESHOLD {
        listings.par_iter().filter_map(to_hit).collect()
    } else {
        listings.iter().filter_map(to_hit).collect()
    };

    match criteria.sort {
        SortOrder::Proximity => hits.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km)),
        SortOrder::Recency => {
            hits.sort_by(|a, b| b.listing.created_at.cmp(&a.listing.created_at))
        }
    }

    hits
}

fn keep(hit: &DiscoveryHit<'_>, criteria: &DiscoveryCriteria) -> bool {
    let listing = hit.listing;

    if !criteria.category.matches(listing.category) {
        return false;
    }

    if let Some(max) = criteria.max_distance_km {
        if hit.distance_km > max {
            return false;
        }
    }

    criteria.query.is_empty()
        || listing.title.contains(&criteria.query)
        || listing.description.contains(&criteria.query)
}

/// Listings in the same category as `target`, excluding `target` itself.
///
/// Input order is preserved.
#[must_use]
pub fn similar_listings<'a>(listings: &'a [Listing], target: &Listing) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|l| l.category == target.category && l.id != target.id)
        .collect()
}

/// Parses a category filter: `all` or a category tag such as `home`.
///
/// # Errors
///
/// Returns an error if the value names no category.
pub fn parse_category(value: &str) -> Result<CategoryFilter> {
    let tag = value.trim().to_lowercase().replace('-', "_");
    if tag == "all" {
        return Ok(CategoryFilter::All);
    }

    Category::ALL
        .into_iter()
        .find(|category| category_tag(*category) == tag)
        .map(CategoryFilter::Only)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid category: {}", value)))
}

/// Stable machine tag of a category, as stored in JSON.
#[must_use]
pub fn category_tag(category: Category) -> &'static str {
    match category {
        Category::Home => "home",
        Category::Electronics => "electronics",
        Category::Clothing => "clothing",
        Category::Books => "books",
        Category::Sports => "sports",
        Category::Kids => "kids",
        Category::Vehicles => "vehicles",
        Category::Others => "others",
    }
}

/// Parses a sort order: `recency`/`newest` or `proximity`/`nearest`.
///
/// # Errors
///
/// Returns an error if the value names no sort order.
pub fn parse_sort(value: &str) -> Result<SortOrder> {
    match value.trim().to_lowercase().as_str() {
        "recency" | "newest" => Ok(SortOrder::Recency),
        "proximity" | "nearest" => Ok(SortOrder::Proximity),
        _ => Err(AppError::InvalidInput(format!(
            "Invalid sort order: {}",
            value
        ))),
    }
}
