// Rust guideline compliant 2026-10-12

//! Finite State Machine module for listing status transitions.
//!
//! Listings only move forward through their lifecycle:
//!
//! - Available → Reserved
//! - Available → Given
//! - Reserved → Given
//!
//! Given is terminal. Self-transitions and reversals are rejected.

use crate::{Error, Listing, Result, Status};

impl Status {
    /// Position of the status along the lifecycle.
    fn stage(self) -> u8 {
        match self {
            Status::Available => 0,
            Status::Reserved => 1,
            Status::Given => 2,
        }
    }

    /// Returns true if no transition leaves this status.
    pub fn is_terminal(&self) -> bool {
        *self == Status::Given
    }

    /// Checks if a transition to the target status is valid.
    ///
    /// # Arguments
    ///
    /// * `target` - The target status to transition to
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not strictly further along the
    /// lifecycle than the current status.
    pub fn can_transition_to(&self, target: Status) -> Result<()> {
        if self.is_terminal() {
            return Err(Error::InvalidTransition(format!(
                "{:?} is terminal, cannot move to {:?}",
                self, target
            )));
        }

        if target.stage() <= self.stage() {
            return Err(Error::InvalidTransition(format!(
                "Cannot transition from {:?} to {:?}",
                self, target
            )));
        }

        Ok(())
    }

    /// Returns the list of valid target states for the current status.
    pub fn valid_transitions(&self) -> Vec<Status> {
        match self {
            Status::Available => vec![Status::Reserved, Status::Given],
            Status::Reserved => vec![Status::Given],
            Status::Given => Vec::new(),
        }
    }
}

/// Validates a status transition for a listing.
///
/// # Arguments
///
/// * `listing` - The listing to transition
/// * `new_status` - The target status
///
/// # Errors
///
/// Returns an error if the transition violates the forward-only lifecycle.
pub fn validate_transition(listing: &Listing, new_status: Status) -> Result<()> {
    listing.status.can_transition_to(new_status).map_err(|err| match err {
        Error::InvalidTransition(msg) => {
            Error::InvalidTransition(format!("{} ({})", msg, listing.id))
        }
        other => other,
    })
}
