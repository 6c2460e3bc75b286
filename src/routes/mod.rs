use axum::{Router, http::Uri};

use crate::{error::AppError, state::AppState};

pub mod bookings;
pub mod doc;
pub mod health;
pub mod providers;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/providers", providers::router())
        .nest("/bookings", bookings::router())
        .nest("/users", users::router())
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
