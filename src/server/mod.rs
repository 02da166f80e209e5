//! HTTP surface: router, shared state and handlers

mod app;
mod error;
mod handlers;
mod state;

pub use app::create_app;
pub use error::ReviewsFailure;
pub use state::AppState;
