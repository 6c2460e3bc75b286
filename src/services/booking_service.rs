use crate::{
    dto::bookings::{BookingPayload, RejectBookingRequest, UserBookingsQuery},
    error::{AppError, AppResult},
    models::{BookingStatus, BookingView, BookingViewRow},
    response::ApiResponse,
    services::user_service::ensure_user_exists,
    state::AppState,
    validation::Validate,
};

const BOOKING_VIEW_SELECT: &str = r#"
    SELECT
        b.id, b.user_id, b.provider_id, b.service_id,
        b.booking_date, b.booking_time, b.status,
        b.username, b.phone_no,
        s.name AS service_name,
        s.price::TEXT AS service_price,
        s.duration::TEXT AS service_duration,
        p.name AS provider_name,
        p.phone AS provider_phone,
        p.service AS provider_service
    FROM bookings b
    LEFT JOIN services s ON b.service_id = s.id
    LEFT JOIN providers p ON s.provider_id = p.id
"#;

fn booking_view_sql(tail: &str) -> String {
    format!("{BOOKING_VIEW_SELECT} {tail}")
}

/// Moves a `confirmed` booking to `cancelled`. The status guard lives in the
/// UPDATE itself, so of two concurrent rejects only one can match.
pub async fn reject_booking(
    state: &AppState,
    payload: RejectBookingRequest,
) -> AppResult<ApiResponse<BookingPayload>> {
    payload.validate()?;
    let id = payload.id;
    tracing::debug!(booking_id = id, "reject booking requested");

    // Rolled back on drop if any step below returns early.
    let mut tx = state.pool.begin().await?;

    let result = sqlx::query("UPDATE bookings SET status = $1 WHERE id = $2 AND status = $3")
        .bind(BookingStatus::Cancelled.as_str())
        .bind(id)
        .bind(BookingStatus::Confirmed.as_str())
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        let current: Option<(String,)> =
            sqlx::query_as("SELECT status FROM bookings WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        return Err(match current {
            None => AppError::NotFound("Booking not found".into()),
            Some((status,)) => AppError::Precondition(format!(
                "Booking cannot be cancelled. Current status: {status}"
            )),
        });
    }

    let row = sqlx::query_as::<_, BookingViewRow>(&booking_view_sql("WHERE b.id = $1"))
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(booking_id = id, "booking cancelled");
    Ok(ApiResponse::success(BookingPayload {
        booking: row.into(),
    }))
}

/// All bookings of one user, newest slot first. Missing service or provider
/// rows leave their columns at the view defaults.
pub async fn list_user_bookings(
    state: &AppState,
    query: UserBookingsQuery,
) -> AppResult<Vec<BookingView>> {
    query.validate()?;
    let user_id = query.user_id;

    ensure_user_exists(&state.orm, user_id).await?;

    let mut conn = state.pool.acquire().await?;
    let rows = sqlx::query_as::<_, BookingViewRow>(&booking_view_sql(
        "WHERE b.user_id = $1 ORDER BY b.booking_date DESC, b.booking_time DESC",
    ))
    .bind(user_id)
    .fetch_all(&mut *conn)
    .await?;

    tracing::debug!(user_id, count = rows.len(), "user bookings loaded");
    Ok(rows.into_iter().map(BookingView::from).collect())
}
