use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::{AppState, ReviewsFailure};
use crate::data::Review;

/// GET /api/reviews - Cached reviews for the configured place.
///
/// Returns 200 with the review list, including cache hits. Any failure to
/// refresh returns 500 with an error message and an empty list.
pub async fn list_reviews(
    State(state): State<AppState>,
) -> Result<Json<Arc<Vec<Review>>>, ReviewsFailure> {
    let reviews = state.reviews.reviews().await?;
    Ok(Json(reviews))
}

/// GET /livez - Basic liveness check.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
