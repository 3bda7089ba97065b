use crate::handlers;
use axum::{routing::{get, post}, Router};

pub fn router() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/calculate", post(handlers::calculate_form))
        .route("/api/calculate", post(handlers::calculate_api))
        .route("/health", get(handlers::health))
}
