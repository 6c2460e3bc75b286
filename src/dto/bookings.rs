use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    extract::{Fields, FromFields},
    models::BookingView,
    validation::{Rule, Validate},
};

#[derive(Deserialize, Debug, ToSchema)]
pub struct RejectBookingRequest {
    pub id: i64,
}

impl FromFields for RejectBookingRequest {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            id: fields.int("id"),
        }
    }
}

impl Validate for RejectBookingRequest {
    fn rules(&self) -> Vec<Rule<'_>> {
        vec![Rule::PositiveId(self.id, "Invalid booking ID")]
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingPayload {
    pub booking: BookingView,
}

/// `uid` is kept raw so a missing value and a malformed one report
/// different messages.
#[derive(Deserialize, Debug, ToSchema)]
pub struct UserBookingsQuery {
    pub uid: String,
    #[serde(skip)]
    pub user_id: i64,
}

impl FromFields for UserBookingsQuery {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            uid: fields.id_text("uid"),
            user_id: fields.int("uid"),
        }
    }
}

impl Validate for UserBookingsQuery {
    fn rules(&self) -> Vec<Rule<'_>> {
        vec![
            Rule::Required(vec![self.uid.as_str()], "User ID is required"),
            Rule::PositiveId(self.user_id, "Invalid user ID"),
        ]
    }
}
