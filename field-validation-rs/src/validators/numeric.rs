//! Numeric validators
//!
//! Size rules compare the value's measure (character count for text, item
//! count for lists, the number itself for numbers) with a numeric parameter.

use super::params;
use crate::value::FieldValue;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NUMERIC: Regex = Regex::new(r"^[-+]?[0-9]+(?:\.[0-9]+)?$").unwrap();
}

fn compare(rule: &str, value: &FieldValue, params: &[String], cmp: fn(f64, f64) -> bool) -> bool {
    let Some(bound) = params::number(rule, params) else {
        return false;
    };

    value.measure().map(|m| cmp(m, bound)).unwrap_or(false)
}

/// Length (or value) equals the parameter
pub fn len(value: &FieldValue, params: &[String]) -> bool {
    compare("len", value, params, |m, n| m == n)
}

/// Length (or value) is at least the parameter
pub fn min(value: &FieldValue, params: &[String]) -> bool {
    compare("min", value, params, |m, n| m >= n)
}

/// Length (or value) is at most the parameter
pub fn max(value: &FieldValue, params: &[String]) -> bool {
    compare("max", value, params, |m, n| m <= n)
}

pub fn gt(value: &FieldValue, params: &[String]) -> bool {
    compare("gt", value, params, |m, n| m > n)
}

pub fn gte(value: &FieldValue, params: &[String]) -> bool {
    compare("gte", value, params, |m, n| m >= n)
}

pub fn lt(value: &FieldValue, params: &[String]) -> bool {
    compare("lt", value, params, |m, n| m < n)
}

pub fn lte(value: &FieldValue, params: &[String]) -> bool {
    compare("lte", value, params, |m, n| m <= n)
}

/// A finite number, or text that reads as a decimal number
pub fn numeric(value: &FieldValue, _params: &[String]) -> bool {
    match value {
        FieldValue::Text(s) => NUMERIC.is_match(s),
        _ => value.as_f64().map(f64::is_finite).unwrap_or(false),
    }
}

/// Validate that a string is a snowflake ID: decimal digits that fit into `u64`
pub fn is_snowflake(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) && s.parse::<u64>().is_ok()
}

/// Snowflake ID given as text or as a non-negative integer
pub fn snowflake(value: &FieldValue, _params: &[String]) -> bool {
    match value {
        FieldValue::Text(_) | FieldValue::Int(_) | FieldValue::UInt(_) => {
            value.as_text().map(|s| is_snowflake(&s)).unwrap_or(false)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::p;
    use test_case::test_case;

    #[test_case("123456789012345", true ; "fifteen digits")]
    #[test_case("18446744073709551615", true ; "u64 max")]
    #[test_case("18446744073709551616", false ; "overflow")]
    #[test_case("12a45", false ; "non digit")]
    #[test_case("", false ; "empty")]
    #[test_case("-12", false ; "negative")]
    #[test_case("+12", false ; "plus sign")]
    fn test_is_snowflake(input: &str, expected: bool) {
        assert_eq!(is_snowflake(input), expected);
    }

    #[test]
    fn test_snowflake_numbers() {
        assert!(snowflake(&FieldValue::UInt(1_234_567_890), &[]));
        assert!(snowflake(&FieldValue::Int(42), &[]));
        assert!(!snowflake(&FieldValue::Int(-42), &[]));
        assert!(!snowflake(&FieldValue::Float(1.5), &[]));
    }

    #[test]
    fn test_string_length_bounds() {
        let name = FieldValue::from("新闻");
        assert!(min(&name, &p(&["2"])));
        assert!(!min(&name, &p(&["3"])));
        assert!(max(&name, &p(&["2"])));
        assert!(len(&name, &p(&["2"])));
        assert!(!len(&name, &p(&["6"])));
    }

    #[test]
    fn test_number_bounds() {
        let n = FieldValue::Int(10);
        assert!(gt(&n, &p(&["9"])));
        assert!(!gt(&n, &p(&["10"])));
        assert!(gte(&n, &p(&["10"])));
        assert!(lt(&n, &p(&["11"])));
        assert!(!lt(&n, &p(&["10"])));
        assert!(lte(&n, &p(&["10"])));
        assert!(min(&FieldValue::Float(0.5), &p(&["0.5"])));
    }

    #[test]
    fn test_bad_bound_fails() {
        assert!(!min(&FieldValue::Int(10), &p(&["ten"])));
        assert!(!max(&FieldValue::Int(10), &[]));
        assert!(!min(&FieldValue::Bool(true), &p(&["0"])));
    }

    #[test]
    fn test_numeric() {
        assert!(numeric(&FieldValue::from("-12.5"), &[]));
        assert!(numeric(&FieldValue::from("42"), &[]));
        assert!(numeric(&FieldValue::Int(3), &[]));
        assert!(!numeric(&FieldValue::from("1e3"), &[]));
        assert!(!numeric(&FieldValue::from(""), &[]));
        assert!(!numeric(&FieldValue::Float(f64::NAN), &[]));
    }
}
