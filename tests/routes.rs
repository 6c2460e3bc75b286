use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

use dorkar_api::{
    app::build_app, config::AppConfig, db::create_lazy_pool,
    middleware::json_errors::json_error_body, state::AppState,
};

// None of these requests get past validation, so the pool never connects.
fn test_app() -> Router {
    let config = AppConfig {
        database_url: "postgres://postgres@127.0.0.1:1/unused".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        max_connections: 1,
        request_timeout: Duration::from_secs(5),
    };
    let pool = create_lazy_pool(&config).unwrap();
    build_app(AppState::new(pool), &config)
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let res = test_app().oneshot(req).await.unwrap();
    let status = res.status();
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

async fn assert_input_error(req: Request<Body>, expected: &str) {
    let (status, json) = send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "error");
    assert_eq!(json["error"], expected);
}

#[tokio::test]
async fn health_is_wrapped_in_success_envelope() {
    let (status, json) = send(get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "success");
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn login_requires_both_fields() {
    assert_input_error(
        form_post("/api/providers/login", "email=a%40b.com"),
        "Email and password are required",
    )
    .await;
}

#[tokio::test]
async fn login_rejects_malformed_email() {
    assert_input_error(
        form_post("/api/providers/login", "email=not-an-email&password=secret"),
        "Invalid email format",
    )
    .await;
}

#[tokio::test]
async fn signup_rejects_bad_phone() {
    assert_input_error(
        form_post(
            "/api/providers/signup",
            "name=Rahim&email=r%40example.com&phone=12ab&service=Plumbing&password=pw",
        ),
        "Invalid phone number",
    )
    .await;
}

#[tokio::test]
async fn signup_requires_every_field() {
    assert_input_error(
        form_post("/api/providers/signup", "name=Rahim&email=r%40example.com"),
        "Please fill all the fields",
    )
    .await;
}

#[tokio::test]
async fn reject_requires_numeric_id() {
    assert_input_error(
        form_post("/api/bookings/reject", "id=abc"),
        "Invalid booking ID",
    )
    .await;
}

#[tokio::test]
async fn update_user_requires_fields() {
    assert_input_error(
        form_post("/api/users/update", "id=3&username=karim"),
        "Missing required fields",
    )
    .await;
}

#[tokio::test]
async fn bookings_require_uid() {
    assert_input_error(get("/api/users/bookings"), "User ID is required").await;
    assert_input_error(get("/api/users/bookings?uid=0"), "User ID is required").await;
    assert_input_error(get("/api/users/bookings?uid=-1"), "Invalid user ID").await;
}

#[tokio::test]
async fn wrong_method_gets_json_error() {
    let (status, json) = send(get("/api/providers/login")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["message"], "error");
    assert_eq!(json["error"], "Invalid request method");

    let (status, _) = send(form_post("/api/users/bookings", "uid=1")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, json) = send(get("/providerlogin.php")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "error");
    assert_eq!(json["error"], "No route for /providerlogin.php");
}

#[tokio::test]
async fn responses_carry_request_id_and_open_cors() {
    let req = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "https://app.example.com")
        .body(Body::empty())
        .unwrap();
    let res = test_app().oneshot(req).await.unwrap();

    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(
        res.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert_eq!(
        res.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
}

// Above the 1 MiB body limit, below axum's own default.
fn oversized_form() -> String {
    format!("id={}", "1".repeat(1536 * 1024))
}

#[tokio::test]
async fn oversized_body_with_length_header_is_json_413() {
    let body = oversized_form();
    let req = Request::builder()
        .method("POST")
        .uri("/api/bookings/reject")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap();

    let res = test_app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "application/json");
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["message"], "error");
    assert_eq!(json["error"], "Payload Too Large");
}

#[tokio::test]
async fn oversized_streamed_body_is_json_413() {
    let (status, json) = send(form_post("/api/bookings/reject", &oversized_form())).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["message"], "error");
    assert_eq!(json["error"], "Payload Too Large");
}

#[tokio::test]
async fn empty_timeout_response_is_wrapped() {
    let res = axum::response::Response::builder()
        .status(StatusCode::REQUEST_TIMEOUT)
        .body(Body::empty())
        .unwrap();

    let res = json_error_body(res).await;
    assert_eq!(res.status(), StatusCode::REQUEST_TIMEOUT);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "application/json");
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["message"], "error");
    assert_eq!(json["error"], "Request Timeout");
}

#[tokio::test]
async fn json_error_bodies_pass_through_untouched() {
    let res = axum::response::Response::builder()
        .status(StatusCode::CONFLICT)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"message":"error","error":"taken"}"#))
        .unwrap();

    let res = json_error_body(res).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error"], "taken");
}
