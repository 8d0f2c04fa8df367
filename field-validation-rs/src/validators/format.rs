//! Format validators
//!
//! Email, URL, IP address and UUID checks, delegated to the `validator`,
//! `url` and `uuid` crates.

use crate::value::FieldValue;

fn text(value: &FieldValue, check: fn(&str) -> bool) -> bool {
    value.as_str().map(check).unwrap_or(false)
}

pub fn email(value: &FieldValue, _params: &[String]) -> bool {
    text(value, |s| validator::validate_email(s))
}

/// Absolute URL with a scheme
pub fn url(value: &FieldValue, _params: &[String]) -> bool {
    text(value, |s| url::Url::parse(s).is_ok())
}

/// IPv4 or IPv6 address
pub fn ip(value: &FieldValue, _params: &[String]) -> bool {
    text(value, |s| validator::validate_ip(s))
}

pub fn uuid(value: &FieldValue, _params: &[String]) -> bool {
    text(value, |s| uuid::Uuid::parse_str(s).is_ok())
}
