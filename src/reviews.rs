//! Review service backing the `/api/reviews` endpoint
//!
//! Pairs a [`TimedCache`] with a [`ReviewSource`]. One instance is built at
//! startup and shared with the request handlers.

use std::sync::Arc;

use crate::cache::TimedCache;
use crate::config::Config;
use crate::data::{PlacesClient, Review, ReviewSource, ReviewsError};

/// Serves reviews from the cache, refreshing from upstream when stale
pub struct ReviewsService {
    cache: TimedCache<Vec<Review>>,
    source: Arc<dyn ReviewSource>,
}

impl std::fmt::Debug for ReviewsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewsService")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl ReviewsService {
    pub fn new(source: Arc<dyn ReviewSource>, cache: TimedCache<Vec<Review>>) -> Self {
        Self { cache, source }
    }

    /// Builds the production service: Places API source, system clock
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(PlacesClient::from_config(config)),
            TimedCache::new(config.cache_ttl()),
        )
    }

    pub fn cache(&self) -> &TimedCache<Vec<Review>> {
        &self.cache
    }

    /// Returns the current reviews
    ///
    /// Fresh cached reviews are returned without touching upstream. On a miss
    /// exactly one upstream lookup is made; if it fails the error is returned
    /// and any previously cached reviews stay in place.
    pub async fn reviews(&self) -> Result<Arc<Vec<Review>>, ReviewsError> {
        let source = Arc::clone(&self.source);

        self.cache
            .get_or_refresh(move || async move {
                tracing::info!("Refreshing reviews from upstream");
                let reviews = source.fetch_reviews().await?;
                tracing::info!(count = reviews.len(), "Fetched reviews");
                Ok::<_, ReviewsError>(reviews)
            })
            .await
            .inspect_err(|e| match e {
                ReviewsError::MissingConfig(name) => {
                    tracing::error!(setting = *name, "Reviews are not configured")
                }
                ReviewsError::Upstream {
                    status,
                    message: Some(message),
                } => tracing::warn!(%status, %message, "Places API rejected the lookup"),
                other => tracing::warn!(error = %other, "Review refresh failed"),
            })
    }
}
