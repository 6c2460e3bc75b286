use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stored booking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    Paid,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Cancelled,
        BookingStatus::Completed,
        BookingStatus::Paid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
            BookingStatus::Paid => "paid",
        }
    }

    /// Name shown to clients. Only applied when reading, never stored.
    pub fn client_label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "requested",
            BookingStatus::Confirmed => "accepted",
            BookingStatus::Cancelled => "rejected",
            BookingStatus::Completed => "completed",
            BookingStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl FromStr for BookingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Maps a stored status string to its client label. Values outside the
/// known domain pass through untouched.
pub fn client_status(raw: &str) -> String {
    match raw.parse::<BookingStatus>() {
        Ok(status) => status.client_label().to_string(),
        Err(UnknownStatus(other)) => {
            tracing::warn!(status = %other, "unknown booking status");
            other
        }
    }
}

/// Public part of a provider row; the password hash never leaves the
/// service layer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProviderInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
}

/// Booking joined with its service and provider, as read from the store.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BookingViewRow {
    pub id: i64,
    pub user_id: i64,
    pub provider_id: i64,
    pub service_id: i64,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
    pub status: String,
    pub username: String,
    pub phone_no: String,
    pub service_name: Option<String>,
    pub service_price: Option<String>,
    pub service_duration: Option<String>,
    pub provider_name: Option<String>,
    pub provider_phone: Option<String>,
    pub provider_service: Option<String>,
}

/// Client-facing booking view: joined columns defaulted, status remapped.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingView {
    pub id: i64,
    pub user_id: i64,
    pub provider_id: i64,
    pub service_id: i64,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
    pub status: String,
    pub username: String,
    pub phone_no: String,
    pub service_name: String,
    pub provider_name: String,
    pub service_price: String,
    pub service_duration: String,
    pub provider_phone: String,
    pub provider_service: String,
}

impl From<BookingViewRow> for BookingView {
    fn from(row: BookingViewRow) -> Self {
        let numeric = |v: Option<String>| v.unwrap_or_else(|| "0".to_string());
        Self {
            id: row.id,
            user_id: row.user_id,
            provider_id: row.provider_id,
            service_id: row.service_id,
            booking_date: row.booking_date,
            booking_time: row.booking_time,
            status: client_status(&row.status),
            username: row.username,
            phone_no: row.phone_no,
            service_name: row.service_name.unwrap_or_default(),
            provider_name: row.provider_name.unwrap_or_default(),
            service_price: numeric(row.service_price),
            service_duration: numeric(row.service_duration),
            provider_phone: row.provider_phone.unwrap_or_default(),
            provider_service: row.provider_service.unwrap_or_default(),
        }
    }
}
