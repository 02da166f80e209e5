use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::{
    handlers::{list_reviews, livez},
    AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let api_routes = Router::new().route("/reviews", get(list_reviews));

    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
