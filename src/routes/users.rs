use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::{
        bookings::UserBookingsQuery,
        users::{UpdateUserRequest, UpdateUserResponse},
    },
    error::AppResult,
    extract::Input,
    models::BookingView,
    response::{ApiResponse, ErrorResponse},
    routes::method_not_allowed,
    services::{booking_service, user_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/update", post(update_user).fallback(method_not_allowed))
        .route("/bookings", get(list_bookings).fallback(method_not_allowed))
}

#[utoipa::path(
    post,
    path = "/api/users/update",
    request_body(content = UpdateUserRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "User saved; `changed` is false when nothing differed", body = ApiResponse<UpdateUserResponse>),
        (status = 400, description = "Missing or malformed field", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    Input(payload): Input<UpdateUserRequest>,
) -> AppResult<Json<ApiResponse<UpdateUserResponse>>> {
    let resp = user_service::update_user(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/users/bookings",
    params(
        ("uid" = i64, Query, description = "User id")
    ),
    responses(
        (status = 200, description = "Bookings of the user, newest first", body = Vec<BookingView>),
        (status = 400, description = "Missing or invalid user id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    Input(query): Input<UserBookingsQuery>,
) -> AppResult<Json<Vec<BookingView>>> {
    let bookings = booking_service::list_user_bookings(&state, query).await?;
    Ok(Json(bookings))
}
