// Rust guideline compliant 2026-10-12

//! Shared application services for Majani.
//!
//! This crate provides reusable, non-CLI-specific services for catalog
//! checks, listing discovery, the listing lifecycle, accounts and one-time
//! codes, recently viewed history and standardized response envelopes.

pub mod accounts;
pub mod catalog;
pub mod clock;
pub mod discover;
pub mod error;
pub mod ids;
pub mod listings;
pub mod otp;
pub mod recent;
pub mod response;
pub mod seed;

pub use accounts::{
    hash_password, is_valid_phone, verify_password, Accounts, CodeLogin, InMemoryUserStore,
    ProfileUpdate, Registration, UserStore,
};
pub use catalog::CatalogContext;
pub use clock::{Clock, FixedClock, SystemClock};
pub use discover::{
    category_tag, discover, discover_hits, parse_category, parse_sort, similar_listings,
    CategoryFilter, DiscoveryCriteria, DiscoveryHit,
};
pub use error::{AppError, AuthError, ErrorCode, Result};
pub use ids::resolve_listing_id;
pub use listings::{give_listing, post_listing, reserve_listing, view_listing};
pub use otp::{InMemoryOtpStore, OtpPolicy, OtpRecord, OtpStore};
pub use recent::RecentViews;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use seed::demo_listings;
