//! String validators
//!
//! Character-class rules, substring rules and the account-related custom
//! rules (`mobile`, `username`, `password`).

use super::params;
use crate::value::FieldValue;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MOBILE: Regex = Regex::new(r"^1[3-9][0-9]{9}$").unwrap();
    static ref USERNAME: Regex = Regex::new(r"^[A-Za-z0-9_-]{4,20}$").unwrap();
    static ref PASSWORD: Regex = Regex::new(r"^[A-Za-z0-9_@$&%!-]{6,32}$").unwrap();
    static ref ALPHA: Regex = Regex::new(r"^[A-Za-z]+$").unwrap();
    static ref ALPHANUM: Regex = Regex::new(r"^[A-Za-z0-9]+$").unwrap();
}

/// Validate mainland mobile number format: 11 digits, `1` then `3`-`9`
pub fn is_mobile(s: &str) -> bool {
    MOBILE.is_match(s)
}

/// Validate username format: 4-20 ASCII letters, digits, `-` or `_`
pub fn is_username(s: &str) -> bool {
    USERNAME.is_match(s)
}

/// Validate password format: 6-32 ASCII letters, digits or `-_@$&%!`
pub fn is_password(s: &str) -> bool {
    PASSWORD.is_match(s)
}

pub fn mobile(value: &FieldValue, _params: &[String]) -> bool {
    match value {
        FieldValue::Text(_) | FieldValue::Int(_) | FieldValue::UInt(_) => {
            value.as_text().map(|s| is_mobile(&s)).unwrap_or(false)
        }
        _ => false,
    }
}

pub fn username(value: &FieldValue, _params: &[String]) -> bool {
    value.as_str().map(is_username).unwrap_or(false)
}

pub fn password(value: &FieldValue, _params: &[String]) -> bool {
    value.as_str().map(is_password).unwrap_or(false)
}

pub fn alpha(value: &FieldValue, _params: &[String]) -> bool {
    value.as_str().map(|s| ALPHA.is_match(s)).unwrap_or(false)
}

pub fn alphanum(value: &FieldValue, _params: &[String]) -> bool {
    value.as_str().map(|s| ALPHANUM.is_match(s)).unwrap_or(false)
}

fn text_with_param(
    rule: &str,
    value: &FieldValue,
    params: &[String],
    check: fn(&str, &str) -> bool,
) -> bool {
    match (value.as_text(), params::first(rule, params)) {
        (Some(text), Some(param)) => check(&text, param),
        _ => false,
    }
}

pub fn contains(value: &FieldValue, params: &[String]) -> bool {
    text_with_param("contains", value, params, |s, p| s.contains(p))
}

pub fn startswith(value: &FieldValue, params: &[String]) -> bool {
    text_with_param("startswith", value, params, |s, p| s.starts_with(p))
}

pub fn endswith(value: &FieldValue, params: &[String]) -> bool {
    text_with_param("endswith", value, params, |s, p| s.ends_with(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::p;
    use test_case::test_case;

    #[test_case("13800138000", true ; "valid")]
    #[test_case("19912345678", true ; "nine as second digit")]
    #[test_case("12800138000", false ; "second digit two")]
    #[test_case("1380013800", false ; "ten digits")]
    #[test_case("138001380001", false ; "twelve digits")]
    #[test_case("23800138000", false ; "first digit two")]
    #[test_case("1380013800a", false ; "letter")]
    #[test_case("１3800138000", false ; "fullwidth digit")]
    fn test_is_mobile(input: &str, expected: bool) {
        assert_eq!(is_mobile(input), expected);
    }

    #[test]
    fn test_mobile_as_number() {
        assert!(mobile(&FieldValue::UInt(13800138000), &[]));
        assert!(!mobile(&FieldValue::Int(12800138000), &[]));
        assert!(!mobile(&FieldValue::Float(13800138000.0), &[]));
    }

    #[test_case("abc", false ; "too short")]
    #[test_case("abcd", true ; "minimum length")]
    #[test_case("user-name_1", true ; "dash and underscore")]
    #[test_case("user name", false ; "space")]
    #[test_case("abcdefghijklmnopqrst", true ; "twenty chars")]
    #[test_case("abcdefghijklmnopqrstu", false ; "twenty one chars")]
    #[test_case("用户名字", false ; "non ascii")]
    fn test_is_username(input: &str, expected: bool) {
        assert_eq!(is_username(input), expected);
    }

    #[test_case("secret", true ; "six letters")]
    #[test_case("p@ss-w0rd_$&%!", true ; "all specials")]
    #[test_case("short", false ; "five chars")]
    #[test_case("pass word", false ; "space")]
    #[test_case("pass#word", false ; "hash not allowed")]
    #[test_case("abcdefghijklmnopqrstuvwxyz012345", true ; "thirty two chars")]
    #[test_case("abcdefghijklmnopqrstuvwxyz0123456", false ; "thirty three chars")]
    fn test_is_password(input: &str, expected: bool) {
        assert_eq!(is_password(input), expected);
    }

    #[test]
    fn test_account_rules_need_text() {
        assert!(!username(&FieldValue::Int(12345), &[]));
        assert!(!password(&FieldValue::Int(123456), &[]));
    }

    #[test]
    fn test_alpha() {
        assert!(alpha(&FieldValue::from("News"), &[]));
        assert!(!alpha(&FieldValue::from("News1"), &[]));
        assert!(!alpha(&FieldValue::from(""), &[]));
        assert!(alphanum(&FieldValue::from("News1"), &[]));
        assert!(!alphanum(&FieldValue::from("news-1"), &[]));
    }

    #[test]
    fn test_substring_rules() {
        let uri = FieldValue::from("/news/latest");
        assert!(startswith(&uri, &p(&["/"])));
        assert!(!startswith(&uri, &p(&["news"])));
        assert!(endswith(&uri, &p(&["latest"])));
        assert!(contains(&uri, &p(&["news"])));
        assert!(!contains(&uri, &p(&["sport"])));
        assert!(!contains(&uri, &[]));
    }
}
