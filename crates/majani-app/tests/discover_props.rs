// Rust guideline compliant 2026-10-12

//! Property-based tests for the discovery pipeline.

use chrono::{Duration, TimeZone, Utc};
use majani_app::{discover_hits, CategoryFilter, DiscoveryCriteria};
use majani_core::{Category, Condition, Coordinate, Listing, ListingDraft, Location, SortOrder};
use proptest::prelude::*;

const ORIGIN: Coordinate = Coordinate::new(35.6892, 51.3890);

fn arb_category() -> impl Strategy<Value = Category> {
    (0..Category::ALL.len()).prop_map(|i| Category::ALL[i])
}

fn arb_listing() -> impl Strategy<Value = Listing> {
    (
        "[a-c]{1,6}",
        arb_category(),
        -500i32..500,
        -500i32..500,
        0i64..10_000,
    )
        .prop_map(|(title, category, dlat, dlon, minutes_ago)| {
            let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
            let draft = ListingDraft {
                owner_id: "usr-0a1b2c".to_string(),
                title,
                description: String::new(),
                images: vec![],
                category,
                condition: Condition::Used,
                location: Location::new(
                    ORIGIN.lat + f64::from(dlat) / 1e3,
                    ORIGIN.lon + f64::from(dlon) / 1e3,
                ),
                city: "Tehran".to_string(),
            };
            Listing::from_draft(draft, now - Duration::minutes(minutes_ago))
        })
}

fn arb_criteria() -> impl Strategy<Value = DiscoveryCriteria> {
    (
        prop::option::of(arb_category()),
        prop::option::of(0.0f64..80.0),
        "[a-c]{0,2}",
        prop::bool::ANY,
    )
        .prop_map(|(category, max_distance_km, query, nearest)| DiscoveryCriteria {
            category: category.map_or(CategoryFilter::All, CategoryFilter::Only),
            max_distance_km,
            query,
            sort: if nearest {
                SortOrder::Proximity
            } else {
                SortOrder::Recency
            },
        })
}

proptest! {
    #[test]
    fn prop_every_hit_passes_every_filter(
        listings in prop::collection::vec(arb_listing(), 0..40),
        criteria in arb_criteria(),
    ) {
        for hit in discover_hits(&listings, &criteria, ORIGIN) {
            prop_assert!(criteria.category.matches(hit.listing.category));
            if let Some(max) = criteria.max_distance_km {
                prop_assert!(hit.distance_km <= max);
            }
            prop_assert!(hit.listing.title.contains(&criteria.query));
        }
    }

    #[test]
    fn prop_nothing_matching_is_dropped(
        listings in prop::collection::vec(arb_listing(), 0..40),
        criteria in arb_criteria(),
    ) {
        let expected = listings
            .iter()
            .filter(|l| criteria.category.matches(l.category))
            .filter(|l| criteria
                .max_distance_km
                .map_or(true, |max| ORIGIN.distance_to(&l.coordinate()) <= max))
            .filter(|l| l.title.contains(&criteria.query) || l.description.contains(&criteria.query))
            .count();
        prop_assert_eq!(discover_hits(&listings, &criteria, ORIGIN).len(), expected);
    }

    #[test]
    fn prop_hits_are_sorted(
        listings in prop::collection::vec(arb_listing(), 0..40),
        criteria in arb_criteria(),
    ) {
        let hits = discover_hits(&listings, &criteria, ORIGIN);
        for pair in hits.windows(2) {
            match criteria.sort {
                SortOrder::Proximity => prop_assert!(pair[0].distance_km <= pair[1].distance_km),
                SortOrder::Recency => {
                    prop_assert!(pair[0].listing.created_at >= pair[1].listing.created_at)
                }
            }
        }
    }
}
