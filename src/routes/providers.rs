use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::providers::{LoginRequest, LoginResponse, SignupRequest},
    error::AppResult,
    extract::Input,
    response::{ApiResponse, Empty, ErrorResponse},
    routes::method_not_allowed,
    services::provider_service::{login_provider, register_provider},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login).fallback(method_not_allowed))
        .route("/signup", post(signup).fallback(method_not_allowed))
}

#[utoipa::path(
    post,
    path = "/api/providers/login",
    request_body(content = LoginRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Provider authenticated", body = ApiResponse<LoginResponse>),
        (status = 400, description = "Missing or malformed field", body = ErrorResponse),
        (status = 401, description = "Unknown email or wrong password", body = ErrorResponse)
    ),
    tag = "Providers"
)]
pub async fn login(
    State(state): State<AppState>,
    Input(payload): Input<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let resp = login_provider(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/providers/signup",
    request_body(content = SignupRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Provider registered", body = ApiResponse<Empty>),
        (status = 400, description = "Missing or malformed field", body = ErrorResponse),
        (status = 409, description = "Email or phone already registered", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Providers"
)]
pub async fn signup(
    State(state): State<AppState>,
    Input(payload): Input<SignupRequest>,
) -> AppResult<Json<ApiResponse<Empty>>> {
    let resp = register_provider(&state, payload).await?;
    Ok(Json(resp))
}
