// Rust guideline compliant 2026-10-12

//! Majani Core Library
//!
//! This crate provides the foundational components for the Majani donation marketplace:
//! - Data models (Listing, User, Category, Condition, Status)
//! - Geodistance (haversine great-circle distance)
//! - Relative-time formatting with an injected clock
//! - Display labels for Persian and English locales
//! - FSM logic (forward-only listing status transitions)
//! - Hash ID generation and resolution
//! - Storage engine (JSONL read/write, streaming, locking)
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod fsm;
pub mod geo;
pub mod identity;
pub mod labels;
pub mod models;
pub mod storage;
pub mod time;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use fsm::validate_transition;
pub use geo::{distance_km, EARTH_RADIUS_KM};
pub use labels::{Label, Locale};
pub use models::{
    Category, Condition, Coordinate, Gender, Listing, ListingDraft, ListingLimits, Location,
    SortOrder, Status, User,
};
pub use storage::Storage;
pub use time::relative_time;
