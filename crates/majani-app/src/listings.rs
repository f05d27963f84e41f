// Rust guideline compliant 2026-10-12

//! Listing lifecycle: posting, viewing, reserving and giving away.

use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use majani_core::identity::{self, LISTING_PREFIX, USER_PREFIX};
use majani_core::{validate_transition, Listing, ListingDraft, ListingLimits, Status, Storage};
use std::collections::HashSet;
use tracing::{debug, info};

/// Attempts at finding a free ID before giving up.
const MAX_ID_ATTEMPTS: u32 = 16;

/// Creates a listing from `draft` and persists it.
///
/// # Arguments
///
/// * `storage` - Catalog storage
/// * `draft` - User-supplied fields
/// * `limits` - Title and image limits
/// * `now` - Creation time
///
/// # Returns
///
/// The stored listing.
///
/// # Errors
///
/// Returns an error if:
/// - The owner ID is malformed
/// - The listing breaks a limit or fails validation
/// - No free ID could be found
/// - The catalog cannot be read or written
pub fn post_listing(
    storage: &Storage,
    draft: ListingDraft,
    limits: &ListingLimits,
    now: DateTime<Utc>,
) -> Result<Listing> {
    identity::validate_id_format(&draft.owner_id, USER_PREFIX)?;

    let mut listing = Listing::from_draft(draft, now);
    listing.check_limits(limits)?;
    listing.validate()?;

    let listing = storage.rewrite(|listings| {
        let taken: HashSet<&str> = listings.iter().map(|l| l.id.as_str()).collect();

        let timestamp = now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp());
        let mut nonce = 0;
        while taken.contains(listing.id.as_str()) {
            nonce += 1;
            if nonce >= MAX_ID_ATTEMPTS {
                return Err(majani_core::Error::InvalidId(format!(
                    "No free listing ID after {} attempts",
                    MAX_ID_ATTEMPTS
                )));
            }
            listing.id = identity::generate_id(
                LISTING_PREFIX,
                &[&listing.title, &listing.owner_id],
                timestamp,
                nonce,
            );
        }

        listings.insert(0, listing.clone());
        Ok(listing)
    })?;

    info!(id = %listing.id, owner = %listing.owner_id, "posted listing");
    Ok(listing)
}

/// Opens a listing, incrementing its view counter.
///
/// # Errors
///
/// Returns an error if the listing is missing or the catalog cannot be written.
pub fn view_listing(storage: &Storage, id: &str) -> Result<Listing> {
    let listing = storage.update(id, |listing| {
        listing.record_view();
        Ok(())
    })?;
    debug!(id = %listing.id, views = listing.views, "viewed listing");
    Ok(listing)
}

/// Reserves an available listing on behalf of `requester_id`.
///
/// # Errors
///
/// Returns an error if:
/// - The requester owns the listing
/// - The listing is not available
/// - The listing is missing or the catalog cannot be written
pub fn reserve_listing(storage: &Storage, id: &str, requester_id: &str) -> Result<Listing> {
    let current = storage.load_by_id(id)?;
    if current.owner_id == requester_id {
        return Err(AppError::NotAllowed(
            "Owners cannot reserve their own listing".to_string(),
        ));
    }

    let listing = transition(storage, id, Status::Reserved)?;
    info!(id = %listing.id, requester = %requester_id, "reserved listing");
    Ok(listing)
}

/// Marks a listing as given. Only the owner may do this.
///
/// # Errors
///
/// Returns an error if:
/// - `actor_id` is not the owner
/// - The listing is already given
/// - The listing is missing or the catalog cannot be written
pub fn give_listing(storage: &Storage, id: &str, actor_id: &str) -> Result<Listing> {
    let current = storage.load_by_id(id)?;
    if current.owner_id != actor_id {
        return Err(AppError::NotAllowed(
            "Only the owner can mark a listing as given".to_string(),
        ));
    }

    let listing = transition(storage, id, Status::Given)?;
    info!(id = %listing.id, "listing given");
    Ok(listing)
}

fn transition(storage: &Storage, id: &str, target: Status) -> Result<Listing> {
    Ok(storage.update(id, |listing| {
        validate_transition(listing, target)?;
        listing.status = target;
        Ok(())
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::TimeZone;
    use majani_core::{Category, Condition, Location};
    use tempfile::TempDir;

    const OWNER: &str = "usr-0a1b2c";
    const OTHER: &str = "usr-ddd444";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
    }

    fn draft(title: &str) -> ListingDraft {
        ListingDraft {
            owner_id: OWNER.to_string(),
            title: title.to_string(),
            description: "Pick up after 6pm".to_string(),
            images: vec![],
            category: Category::Home,
            condition: Condition::Used,
            location: Location::new(35.7, 51.4).with_address("Haft-e Tir"),
            city: "Tehran".to_string(),
        }
    }

    fn setup() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("listings.jsonl")).unwrap();
        (dir, storage)
    }

    #[test]
    fn test_post_listing_defaults() {
        let (_dir, storage) = setup();
        let listing = post_listing(&storage, draft("Armchair"), &ListingLimits::default(), now())
            .unwrap();

        assert_eq!(listing.status, Status::Available);
        assert_eq!(listing.views, 0);
        assert_eq!(listing.images.len(), 1);
        assert_eq!(listing.created_at, now());
        assert_eq!(storage.load_all().unwrap(), vec![listing]);
    }

    #[test]
    fn test_post_listing_enforces_limits() {
        let (_dir, storage) = setup();
        let limits = ListingLimits {
            max_title_len: 5,
            max_images: 1,
        };
        assert!(post_listing(&storage, draft("Armchair"), &limits, now()).is_err());

        let mut too_many = draft("Desk");
        too_many.images = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        assert!(post_listing(&storage, too_many, &limits, now()).is_err());
        assert!(storage.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_post_listing_rejects_bad_owner_and_coordinates() {
        let (_dir, storage) = setup();
        let mut bad_owner = draft("Desk");
        bad_owner.owner_id = "sara".to_string();
        assert!(post_listing(&storage, bad_owner, &ListingLimits::default(), now()).is_err());

        let mut bad_location = draft("Desk");
        bad_location.location = Location::new(95.0, 51.4);
        let err = post_listing(&storage, bad_location, &ListingLimits::default(), now())
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }

    #[test]
    fn test_post_listing_keeps_unreadable_records() {
        let (_dir, storage) = setup();
        let old = Listing::from_draft(draft("Bookshelf"), now());
        let mut value = serde_json::to_value(&old).unwrap();
        value["created_at"] = "not-a-date".into();
        let line = value.to_string();
        std::fs::write(storage.path(), format!("{}\n", line)).unwrap();

        let posted =
            post_listing(&storage, draft("Armchair"), &ListingLimits::default(), now()).unwrap();

        let content = std::fs::read_to_string(storage.path()).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains(&old.id));
        assert!(content.lines().any(|l| l == line));
        assert_eq!(storage.load_all().unwrap(), vec![posted]);
    }

    #[test]
    fn test_post_same_draft_twice_gets_distinct_ids() {
        let (_dir, storage) = setup();
        let limits = ListingLimits::default();
        let first = post_listing(&storage, draft("Lamp"), &limits, now()).unwrap();
        let second = post_listing(&storage, draft("Lamp"), &limits, now()).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(storage.load_all().unwrap().len(), 2);
    }

    #[test]
    fn test_view_increments_counter() {
        let (_dir, storage) = setup();
        let listing =
            post_listing(&storage, draft("Lamp"), &ListingLimits::default(), now()).unwrap();
        view_listing(&storage, &listing.id).unwrap();
        let viewed = view_listing(&storage, &listing.id).unwrap();
        assert_eq!(viewed.views, 2);
    }

    #[test]
    fn test_owner_cannot_reserve_own_listing() {
        let (_dir, storage) = setup();
        let listing =
            post_listing(&storage, draft("Lamp"), &ListingLimits::default(), now()).unwrap();
        let err = reserve_listing(&storage, &listing.id, OWNER).unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotAllowed);
    }

    #[test]
    fn test_reserve_then_give() {
        let (_dir, storage) = setup();
        let listing =
            post_listing(&storage, draft("Lamp"), &ListingLimits::default(), now()).unwrap();

        let reserved = reserve_listing(&storage, &listing.id, OTHER).unwrap();
        assert_eq!(reserved.status, Status::Reserved);

        let err = reserve_listing(&storage, &listing.id, "usr-eee555").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidTransition);

        let given = give_listing(&storage, &listing.id, OWNER).unwrap();
        assert_eq!(given.status, Status::Given);

        let err = give_listing(&storage, &listing.id, OWNER).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidTransition);
    }

    #[test]
    fn test_only_owner_gives() {
        let (_dir, storage) = setup();
        let listing =
            post_listing(&storage, draft("Lamp"), &ListingLimits::default(), now()).unwrap();
        let err = give_listing(&storage, &listing.id, OTHER).unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotAllowed);
    }

    #[test]
    fn test_missing_listing() {
        let (_dir, storage) = setup();
        let err = view_listing(&storage, "lst-ffffff").unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
