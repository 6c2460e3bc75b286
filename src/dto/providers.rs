use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    extract::{Fields, FromFields},
    models::ProviderInfo,
    validation::{Rule, Validate},
};

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl FromFields for LoginRequest {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            email: fields.text("email"),
            password: fields.text("password"),
        }
    }
}

impl Validate for LoginRequest {
    fn rules(&self) -> Vec<Rule<'_>> {
        vec![
            Rule::Required(
                vec![self.email.as_str(), self.password.as_str()],
                "Email and password are required",
            ),
            Rule::Email(&self.email, "Invalid email format"),
        ]
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[serde(rename = "providerInfo")]
    pub provider_info: ProviderInfo,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub password: String,
}

impl FromFields for SignupRequest {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            name: fields.text("name"),
            email: fields.text("email"),
            phone: fields.text("phone"),
            service: fields.text("service"),
            password: fields.text("password"),
        }
    }
}

impl Validate for SignupRequest {
    fn rules(&self) -> Vec<Rule<'_>> {
        vec![
            Rule::Required(
                vec![
                    self.name.as_str(),
                    self.email.as_str(),
                    self.phone.as_str(),
                    self.service.as_str(),
                    self.password.as_str(),
                ],
                "Please fill all the fields",
            ),
            Rule::Email(&self.email, "Invalid email format"),
            Rule::Phone(&self.phone, "Invalid phone number"),
        ]
    }
}
