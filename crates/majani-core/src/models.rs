// Rust guideline compliant 2026-10-12

//! Core data models for Majani.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder image attached to listings posted without photos.
pub const DEFAULT_LISTING_IMAGE: &str =
    "https://images.unsplash.com/photo-1513542787859-ff391de288aa?auto=format&fit=crop&w=400&q=80";

/// Trust score assigned to newly registered users.
pub const DEFAULT_TRUST_SCORE: u8 = 50;

/// Upper bound of the trust score scale.
pub const MAX_TRUST_SCORE: u8 = 100;

/// Status of a listing in the finite state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Listing is open for reservation.
    Available,
    /// A recipient has claimed the listing.
    Reserved,
    /// The item has been handed over.
    Given,
}

/// Closed set of listing categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Home and kitchen.
    Home,
    /// Electronics and digital goods.
    Electronics,
    /// Clothing.
    Clothing,
    /// Books and stationery.
    Books,
    /// Sports and leisure.
    Sports,
    /// Kids and babies.
    Kids,
    /// Vehicles.
    Vehicles,
    /// Anything else.
    Others,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 8] = [
        Category::Home,
        Category::Electronics,
        Category::Clothing,
        Category::Books,
        Category::Sports,
        Category::Kids,
        Category::Vehicles,
        Category::Others,
    ];
}

/// Physical condition of a donated item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Brand new.
    New,
    /// Barely used.
    AlmostNew,
    /// Used, working.
    Used,
    /// Needs repair.
    NeedsRepair,
}

/// Self-reported gender on a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Prefers not to say.
    RatherNotSay,
}

/// Sort order applied by the discovery pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Newest listings first.
    #[default]
    Recency,
    /// Closest listings first.
    Proximity,
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude degrees.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        crate::geo::distance_km(*self, *other)
    }

    /// Validates that latitude lies in [-90, 90] and longitude in [-180, 180].
    ///
    /// # Errors
    ///
    /// Returns an error if either component is out of range or not finite.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(crate::Error::InvalidListing(format!(
                "Latitude must be within [-90, 90], got {}",
                self.lat
            )));
        }
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(crate::Error::InvalidListing(format!(
                "Longitude must be within [-180, 180], got {}",
                self.lon
            )));
        }
        Ok(())
    }
}

/// Where a listing can be picked up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Pickup point.
    #[serde(flatten)]
    pub coordinate: Coordinate,
    /// Short free-text address, e.g. a neighbourhood or square.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Location {
    /// Creates a location without an address.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            coordinate: Coordinate::new(lat, lon),
            address: None,
        }
    }

    /// Attaches a free-text address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// Size limits applied when a listing is posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingLimits {
    /// Maximum title length in characters.
    pub max_title_len: usize,
    /// Maximum number of images.
    pub max_images: usize,
}

impl Default for ListingLimits {
    fn default() -> Self {
        Self {
            max_title_len: 80,
            max_images: 8,
        }
    }
}

/// User-supplied fields for a new listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft {
    /// ID of the posting user.
    pub owner_id: String,
    /// One-line title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Image references in display order.
    pub images: Vec<String>,
    /// Category tag.
    pub category: Category,
    /// Condition tag.
    pub condition: Condition,
    /// Pickup location.
    pub location: Location,
    /// City label.
    pub city: String,
}

/// A donated item offered on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique hash-based identifier (format: lst-XXXXXX).
    pub id: String,
    /// ID of the owning user.
    pub owner_id: String,
    /// One-line title.
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Image references in display order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Category tag.
    pub category: Category,
    /// Condition tag.
    pub condition: Condition,
    /// Pickup location.
    pub location: Location,
    /// City label.
    pub city: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Current status in the FSM.
    pub status: Status,
    /// Number of times the listing was opened.
    #[serde(default)]
    pub views: u64,
}

impl Listing {
    /// Creates a new available listing from a draft.
    ///
    /// A draft without images receives [`DEFAULT_LISTING_IMAGE`].
    ///
    /// # Arguments
    ///
    /// * `draft` - The user-supplied fields
    /// * `now` - Creation time
    pub fn from_draft(draft: ListingDraft, now: DateTime<Utc>) -> Self {
        let id = crate::identity::generate_id(
            crate::identity::LISTING_PREFIX,
            &[&draft.title, &draft.owner_id],
            now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp()),
            0,
        );

        let images = if draft.images.is_empty() {
            vec![DEFAULT_LISTING_IMAGE.to_string()]
        } else {
            draft.images
        };

        Self {
            id,
            owner_id: draft.owner_id,
            title: draft.title,
            description: draft.description,
            images,
            category: draft.category,
            condition: draft.condition,
            location: draft.location,
            city: draft.city,
            created_at: now,
            status: Status::Available,
            views: 0,
        }
    }

    /// Pickup coordinate of the listing.
    pub fn coordinate(&self) -> Coordinate {
        self.location.coordinate
    }

    /// Increments the view counter.
    pub fn record_view(&mut self) {
        self.views = self.views.saturating_add(1);
    }

    /// Validates the structural invariants of the listing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Title or owner is empty
    /// - The ID format is invalid
    /// - The coordinate is out of range
    pub fn validate(&self) -> crate::Result<()> {
        if self.title.trim().is_empty() {
            return Err(crate::Error::InvalidListing(
                "Title cannot be empty".to_string(),
            ));
        }

        if self.owner_id.trim().is_empty() {
            return Err(crate::Error::InvalidListing(
                "Owner cannot be empty".to_string(),
            ));
        }

        crate::identity::validate_id_format(&self.id, crate::identity::LISTING_PREFIX)?;
        self.location.coordinate.validate()
    }

    /// Checks posting limits on title length and image count.
    ///
    /// # Errors
    ///
    /// Returns an error if the title or image list exceeds `limits`.
    pub fn check_limits(&self, limits: &ListingLimits) -> crate::Result<()> {
        let title_len = self.title.chars().count();
        if title_len > limits.max_title_len {
            return Err(crate::Error::InvalidListing(format!(
                "Title must be at most {} characters, got {}",
                limits.max_title_len, title_len
            )));
        }

        if self.images.len() > limits.max_images {
            return Err(crate::Error::InvalidListing(format!(
                "At most {} images allowed, got {}",
                limits.max_images,
                self.images.len()
            )));
        }

        Ok(())
    }
}

/// A registered marketplace user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique hash-based identifier (format: usr-XXXXXX).
    pub id: String,
    /// Full name.
    pub name: String,
    /// Mobile number, `09` followed by nine digits.
    pub phone: String,
    /// Salted password hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// City label.
    pub city: String,
    /// Province label.
    #[serde(default)]
    pub province: Option<String>,
    /// Avatar image reference.
    pub avatar: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Self-reported gender.
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Date of birth.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Short address.
    #[serde(default)]
    pub address: Option<String>,
    /// Free-text biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// Registration time.
    pub joined_at: DateTime<Utc>,
    /// Last successful login.
    pub last_active: DateTime<Utc>,
    /// Number of items the user gave away.
    #[serde(default)]
    pub donated_count: u32,
    /// Number of items the user received.
    #[serde(default)]
    pub received_count: u32,
    /// Trust score (0-100).
    pub trust_score: u8,
    /// Whether the user may open the admin panel.
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    /// Validates the structural invariants of the user.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Name or phone is empty
    /// - The ID format is invalid
    /// - The trust score exceeds [`MAX_TRUST_SCORE`]
    pub fn validate(&self) -> crate::Result<()> {
        if self.name.trim().is_empty() {
            return Err(crate::Error::InvalidUser(
                "User name cannot be empty".to_string(),
            ));
        }

        if self.phone.trim().is_empty() {
            return Err(crate::Error::InvalidUser(
                "User phone cannot be empty".to_string(),
            ));
        }

        if self.trust_score > MAX_TRUST_SCORE {
            return Err(crate::Error::InvalidUser(format!(
                "Trust score must be 0-{}, got {}",
                MAX_TRUST_SCORE, self.trust_score
            )));
        }

        crate::identity::validate_id_format(&self.id, crate::identity::USER_PREFIX)
    }
}
