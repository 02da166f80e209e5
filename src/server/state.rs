//! Shared application state passed to every request handler.

use std::sync::Arc;

use crate::config::Config;
use crate::reviews::ReviewsService;

/// Shared application state.
///
/// Cloned per request; the review service inside is built once at startup.
#[derive(Clone, Debug)]
pub struct AppState {
    pub reviews: Arc<ReviewsService>,
}

impl AppState {
    pub fn new(reviews: ReviewsService) -> Self {
        Self {
            reviews: Arc::new(reviews),
        }
    }

    /// Builds state backed by the Places API using `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(ReviewsService::from_config(config))
    }
}
