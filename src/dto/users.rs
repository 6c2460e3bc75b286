use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    extract::{Fields, FromFields},
    validation::{Rule, Validate},
};

#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateUserRequest {
    pub id: String,
    #[serde(skip)]
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub phone_no: String,
    pub address: String,
}

impl FromFields for UpdateUserRequest {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            id: fields.id_text("id"),
            user_id: fields.int("id"),
            username: fields.text("username"),
            email: fields.text("email"),
            phone_no: fields.text("phone_no"),
            address: fields.text("address"),
        }
    }
}

impl Validate for UpdateUserRequest {
    fn rules(&self) -> Vec<Rule<'_>> {
        vec![
            Rule::Required(
                vec![
                    self.id.as_str(),
                    self.username.as_str(),
                    self.email.as_str(),
                    self.phone_no.as_str(),
                    self.address.as_str(),
                ],
                "Missing required fields",
            ),
            Rule::PositiveId(self.user_id, "Invalid user ID"),
            Rule::Email(&self.email, "Invalid email format"),
            Rule::Phone(&self.phone_no, "Invalid phone number"),
        ]
    }
}

/// Whether the update changed the stored row. `false` means the row exists
/// but already held these values.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateUserResponse {
    pub changed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    Unchanged,
}

impl From<UpdateOutcome> for UpdateUserResponse {
    fn from(outcome: UpdateOutcome) -> Self {
        Self {
            changed: outcome == UpdateOutcome::Updated,
        }
    }
}
