use std::collections::HashMap;

use axum::{
    Form,
    extract::{FromRequest, Request},
    http::StatusCode,
};

use crate::error::AppError;

/// Raw string-keyed request input, from either a urlencoded body or a query
/// string. Lookups never fail: absent keys read as empty.
#[derive(Debug, Default, Clone)]
pub struct Fields(HashMap<String, String>);

impl Fields {
    pub fn new(raw: HashMap<String, String>) -> Self {
        Self(raw)
    }

    /// Trimmed value, or `""` when the key is missing.
    pub fn text(&self, key: &str) -> String {
        self.0
            .get(key)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    /// Like [`Fields::text`], but a literal `0` reads as absent, so a zero
    /// id is reported as missing rather than invalid.
    pub fn id_text(&self, key: &str) -> String {
        let value = self.text(key);
        if value == "0" {
            String::new()
        } else {
            value
        }
    }

    /// Integer value, or `0` when the key is missing or not a number.
    pub fn int(&self, key: &str) -> i64 {
        self.0
            .get(key)
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(0)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Builds an endpoint's typed record out of raw fields.
pub trait FromFields: Sized {
    fn from_fields(fields: &Fields) -> Self;
}

/// Extractor running field extraction for `T`. POST bodies are read as
/// `application/x-www-form-urlencoded`; GET requests read the query string.
#[derive(Debug)]
pub struct Input<T>(pub T);

impl<S, T> FromRequest<S> for Input<T>
where
    S: Send + Sync,
    T: FromFields + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(raw) = Form::<HashMap<String, String>>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge,
                _ => AppError::Input(rejection.body_text()),
            })?;
        Ok(Input(T::from_fields(&Fields::new(raw))))
    }
}
