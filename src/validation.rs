use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateEmail;

use crate::error::{AppError, AppResult};

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d{7,15}$").expect("phone pattern compiles"));

/// One validation rule together with the message reported when it fails.
#[derive(Debug, Clone)]
pub enum Rule<'a> {
    /// Every listed value must be non-empty.
    Required(Vec<&'a str>, &'static str),
    Email(&'a str, &'static str),
    Phone(&'a str, &'static str),
    PositiveId(i64, &'static str),
}

impl Rule<'_> {
    pub fn passes(&self) -> bool {
        match self {
            Rule::Required(values, _) => values.iter().all(|v| !v.is_empty()),
            Rule::Email(value, _) => is_valid_email(value),
            Rule::Phone(value, _) => is_valid_phone(value),
            Rule::PositiveId(id, _) => *id > 0,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required(_, msg)
            | Rule::Email(_, msg)
            | Rule::Phone(_, msg)
            | Rule::PositiveId(_, msg) => *msg,
        }
    }
}

/// Implemented by request records that declare an ordered rule list.
pub trait Validate {
    fn rules(&self) -> Vec<Rule<'_>>;

    /// Fail-fast: the first failing rule decides the error.
    fn validate(&self) -> AppResult<()> {
        check(&self.rules())
    }
}

pub fn check(rules: &[Rule<'_>]) -> AppResult<()> {
    match rules.iter().find(|rule| !rule.passes()) {
        Some(rule) => Err(AppError::Input(rule.message().to_string())),
        None => Ok(()),
    }
}

pub fn is_valid_email(value: &str) -> bool {
    value.validate_email()
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}
