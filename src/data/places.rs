//! Google Places "place details" API client
//!
//! Fetches the reviews attached to a single place and normalizes them into
//! [`Review`] records.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use super::{epoch_seconds_to_date, Review, REVIEW_CATEGORY};
use crate::config::Config;

/// Base URL for the place details endpoint
pub const PLACES_DETAILS_URL: &str = "https://maps.googleapis.com/maps/api/place/details/json";

/// Upstream status reported for a successful lookup
const STATUS_OK: &str = "OK";

/// Errors that can occur when fetching reviews
#[derive(Debug, Error)]
pub enum ReviewsError {
    /// A required secret is not configured
    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success HTTP status
    #[error("Places API responded with HTTP {0}")]
    Status(StatusCode),

    /// Upstream answered with a non-OK lookup status
    #[error("Places API returned status {status}")]
    Upstream {
        status: String,
        message: Option<String>,
    },

    /// Failed to parse the response body
    #[error("Failed to parse Places API response: {0}")]
    Parse(String),

    /// A review in the payload could not be normalized
    #[error("Invalid review in Places API response: {0}")]
    InvalidReview(String),
}

/// Anything that can produce a fresh list of normalized reviews
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Performs one upstream lookup
    async fn fetch_reviews(&self) -> Result<Vec<Review>, ReviewsError>;
}

/// Place details response
#[derive(Debug, Deserialize)]
struct PlaceDetailsResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    result: Option<PlaceDetails>,
}

#[derive(Debug, Deserialize)]
struct PlaceDetails {
    #[serde(default)]
    reviews: Option<Vec<PlaceReview>>,
}

/// A single review as returned by the Places API
#[derive(Debug, Deserialize)]
struct PlaceReview {
    author_name: String,
    rating: i64,
    #[serde(default)]
    text: String,
    #[serde(default)]
    profile_photo_url: Option<String>,
    /// Epoch seconds
    time: i64,
}

/// Client for fetching reviews from the Places API
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http_client: Client,
    api_key: Option<String>,
    place_id: Option<String>,
    base_url: String,
}

impl PlacesClient {
    /// Creates a new PlacesClient for the given credentials
    ///
    /// Credentials are optional here; a missing one fails every fetch with
    /// [`ReviewsError::MissingConfig`] rather than failing construction.
    pub fn new(api_key: Option<String>, place_id: Option<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key,
            place_id,
            base_url: PLACES_DETAILS_URL.to_string(),
        }
    }

    /// Creates a PlacesClient from application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.places_api_key.clone(), config.place_id.clone())
            .with_base_url(config.places_base_url.clone())
    }

    /// Overrides the endpoint URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn credentials(&self) -> Result<(&str, &str), ReviewsError> {
        let api_key = non_blank(self.api_key.as_deref())
            .ok_or(ReviewsError::MissingConfig("GOOGLE_PLACES_API_KEY"))?;
        let place_id = non_blank(self.place_id.as_deref())
            .ok_or(ReviewsError::MissingConfig("GOOGLE_PLACE_ID"))?;
        Ok((api_key, place_id))
    }

    /// Fetches and normalizes the reviews for the configured place
    ///
    /// # Returns
    /// * `Ok(Vec<Review>)` - Normalized reviews, possibly empty
    /// * `Err(ReviewsError)` - Missing credentials, transport failure, non-OK
    ///   status, or a payload that cannot be normalized
    pub async fn fetch(&self) -> Result<Vec<Review>, ReviewsError> {
        let (api_key, place_id) = self.credentials()?;

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("place_id", place_id), ("fields", "reviews"), ("key", api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReviewsError::Status(status));
        }

        let text = response.text().await?;
        parse_response(&text)
    }
}

#[async_trait]
impl ReviewSource for PlacesClient {
    async fn fetch_reviews(&self) -> Result<Vec<Review>, ReviewsError> {
        self.fetch().await
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parses a place details body into normalized reviews
fn parse_response(body: &str) -> Result<Vec<Review>, ReviewsError> {
    let response: PlaceDetailsResponse =
        serde_json::from_str(body).map_err(|e| ReviewsError::Parse(e.to_string()))?;

    if response.status != STATUS_OK {
        return Err(ReviewsError::Upstream {
            status: response.status,
            message: response.error_message,
        });
    }

    let reviews = response
        .result
        .and_then(|details| details.reviews)
        .unwrap_or_default();

    reviews
        .into_iter()
        .enumerate()
        .map(|(index, review)| normalize_review(index, review))
        .collect()
}

/// Converts one upstream review, validating its rating and timestamp
fn normalize_review(index: usize, review: PlaceReview) -> Result<Review, ReviewsError> {
    let rating = u8::try_from(review.rating)
        .ok()
        .filter(|r| (1..=5).contains(r))
        .ok_or_else(|| {
            ReviewsError::InvalidReview(format!(
                "rating {} out of range for review by {}",
                review.rating, review.author_name
            ))
        })?;

    let date = epoch_seconds_to_date(review.time).ok_or_else(|| {
        ReviewsError::InvalidReview(format!("timestamp {} out of range", review.time))
    })?;

    let id = u32::try_from(index + 1)
        .map_err(|_| ReviewsError::InvalidReview("too many reviews".to_string()))?;

    Ok(Review {
        id,
        name: review.author_name,
        rating,
        text: review.text,
        avatar: review.profile_photo_url,
        category: REVIEW_CATEGORY.to_string(),
        date,
    })
}
