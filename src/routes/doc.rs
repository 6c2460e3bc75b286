use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        bookings::{BookingPayload, RejectBookingRequest, UserBookingsQuery},
        providers::{LoginRequest, LoginResponse, SignupRequest},
        users::{UpdateUserRequest, UpdateUserResponse},
    },
    models::{BookingStatus, BookingView, ProviderInfo},
    response::{ApiResponse, Empty, ErrorResponse},
    routes::{bookings, health, providers, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        providers::login,
        providers::signup,
        bookings::reject_booking,
        users::update_user,
        users::list_bookings
    ),
    components(
        schemas(
            ProviderInfo,
            BookingStatus,
            BookingView,
            LoginRequest,
            LoginResponse,
            SignupRequest,
            RejectBookingRequest,
            BookingPayload,
            UserBookingsQuery,
            UpdateUserRequest,
            UpdateUserResponse,
            Empty,
            ErrorResponse,
            ApiResponse<LoginResponse>,
            ApiResponse<BookingPayload>,
            ApiResponse<UpdateUserResponse>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Providers", description = "Provider login and signup"),
        (name = "Bookings", description = "Booking status transitions"),
        (name = "Users", description = "User profile and bookings"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
