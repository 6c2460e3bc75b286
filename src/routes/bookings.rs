use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::bookings::{BookingPayload, RejectBookingRequest},
    error::AppResult,
    extract::Input,
    response::{ApiResponse, ErrorResponse},
    routes::method_not_allowed,
    services::booking_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/reject", post(reject_booking).fallback(method_not_allowed))
}

#[utoipa::path(
    post,
    path = "/api/bookings/reject",
    request_body(content = RejectBookingRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Booking cancelled", body = ApiResponse<BookingPayload>),
        (status = 400, description = "Invalid booking id", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
        (status = 422, description = "Booking is not in the confirmed state", body = ErrorResponse)
    ),
    tag = "Bookings"
)]
pub async fn reject_booking(
    State(state): State<AppState>,
    Input(payload): Input<RejectBookingRequest>,
) -> AppResult<Json<ApiResponse<BookingPayload>>> {
    let resp = booking_service::reject_booking(&state, payload).await?;
    Ok(Json(resp))
}
