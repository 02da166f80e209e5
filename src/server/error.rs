use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::data::{Review, ReviewsError};

/// A failed review lookup, rendered as `500 { error, reviews: [] }`
#[derive(Debug)]
pub struct ReviewsFailure(pub ReviewsError);

#[derive(Serialize)]
struct FailureBody {
    error: String,
    reviews: Vec<Review>,
}

impl IntoResponse for ReviewsFailure {
    fn into_response(self) -> Response {
        let body = FailureBody {
            error: self.0.to_string(),
            reviews: Vec::new(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<ReviewsError> for ReviewsFailure {
    fn from(err: ReviewsError) -> Self {
        Self(err)
    }
}
