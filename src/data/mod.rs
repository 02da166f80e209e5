//! Core data models for the reviews service
//!
//! This module contains the normalized review record served by the API and the
//! upstream client that produces it.

pub mod places;

pub use places::{PlacesClient, ReviewSource, ReviewsError, PLACES_DETAILS_URL};

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

/// Category label attached to every review served by the API
pub const REVIEW_CATEGORY: &str = "Google Review";

/// A customer review normalized from the upstream place details payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    /// Sequential identifier starting at 1, in upstream order
    pub id: u32,
    /// Display name of the reviewer
    pub name: String,
    /// Star rating (1-5)
    pub rating: u8,
    /// Review body
    pub text: String,
    /// Profile photo URL, if the reviewer has one
    pub avatar: Option<String>,
    /// Fixed category label
    pub category: String,
    /// Calendar date the review was posted (UTC)
    pub date: NaiveDate,
}

/// Converts an epoch timestamp in seconds to its UTC calendar date
///
/// Returns `None` when the timestamp is outside the range chrono can represent.
pub fn epoch_seconds_to_date(seconds: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(seconds, 0).map(|dt| dt.date_naive())
}
