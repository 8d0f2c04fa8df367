//! Built-in rules
//!
//! Each rule is a plain function over a [`FieldValue`] and its string
//! parameters. [`BUILTIN_RULES`] binds them to their names and default
//! English templates; [`RuleRegistry::with_builtins`](crate::RuleRegistry::with_builtins)
//! loads the whole table.
//!
//! Predicates never fail: a value or parameter they cannot interpret makes
//! the rule fail.

pub mod format;
pub mod generic;
pub mod numeric;
pub mod path;
pub mod string;

use crate::value::FieldValue;

/// Signature shared by all built-in rules
pub type BuiltinPredicate = fn(&FieldValue, &[String]) -> bool;

/// Name of the rule that absent values are checked against
pub const REQUIRED: &str = "required";

/// Name of the marker rule that lets a field be absent
pub const OMITEMPTY: &str = "omitempty";

/// Built-in rules as `(name, predicate, default template)`
pub const BUILTIN_RULES: &[(&str, BuiltinPredicate, &str)] = &[
    // Library rules
    (REQUIRED, generic::required, "{0} is a required field"),
    (OMITEMPTY, generic::omitempty, "{0} may be omitted"),
    ("len", numeric::len, "{0} must have a length of {1}"),
    ("min", numeric::min, "{0} must be at least {1}"),
    ("max", numeric::max, "{0} must be at most {1}"),
    ("gt", numeric::gt, "{0} must be greater than {1}"),
    ("gte", numeric::gte, "{0} must be greater than or equal to {1}"),
    ("lt", numeric::lt, "{0} must be less than {1}"),
    ("lte", numeric::lte, "{0} must be less than or equal to {1}"),
    ("eq", generic::eq, "{0} is not equal to {1}"),
    ("ne", generic::ne, "{0} should not be equal to {1}"),
    ("oneof", generic::oneof, "{0} must be one of [{1}]"),
    ("numeric", numeric::numeric, "{0} must be a valid numeric value"),
    ("email", format::email, "{0} must be a valid email address"),
    ("url", format::url, "{0} must be a valid URL"),
    ("ip", format::ip, "{0} must be a valid IP address"),
    ("uuid", format::uuid, "{0} must be a valid UUID"),
    ("alpha", string::alpha, "{0} can only contain alphabetic characters"),
    ("alphanum", string::alphanum, "{0} can only contain alphanumeric characters"),
    ("contains", string::contains, "{0} must contain the text '{1}'"),
    ("startswith", string::startswith, "{0} must start with text '{1}'"),
    ("endswith", string::endswith, "{0} must end with text '{1}'"),
    // Custom rules
    ("mobile", string::mobile, "invalid mobile number format"),
    ("dir", path::dir, "invalid directory format"),
    ("username", string::username, "enter 4-20 characters: letters, digits, `-`, `_`"),
    (
        "password",
        string::password,
        "enter 6-32 characters: letters, digits, and the special characters `-_@$&%!`",
    ),
    ("snowflake", numeric::snowflake, "invalid snowflake ID format"),
];

/// Parameter helpers shared by the rule modules
pub(crate) mod params {
    /// First parameter, logging when the rule was declared without one
    pub fn first<'a>(rule: &str, params: &'a [String]) -> Option<&'a str> {
        let param = params.first().map(String::as_str);
        if param.is_none() {
            log::warn!("Rule '{}' requires a parameter, none was given", rule);
        }
        param
    }

    /// First parameter as a number
    pub fn number(rule: &str, params: &[String]) -> Option<f64> {
        let raw = first(rule, params)?;
        match raw.trim().parse::<f64>() {
            Ok(n) => Some(n),
            Err(_) => {
                log::warn!("Rule '{}' has non-numeric parameter '{}'", rule, raw);
                None
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn p(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
