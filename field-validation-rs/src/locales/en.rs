//! English messages
//!
//! Generic English wording already lives in the rules' default templates;
//! this bundle only adds the kind-specific variants of the size rules.

use super::LocaleBundle;
use crate::value::ValueKind;

pub const BUNDLE: LocaleBundle = LocaleBundle {
    locale: "en",
    messages: &[],
    kind_messages: &[
        ("len", ValueKind::String, "{0} must be {1} characters in length"),
        ("len", ValueKind::Number, "{0} must be equal to {1}"),
        ("len", ValueKind::List, "{0} must contain {1} items"),
        ("min", ValueKind::String, "{0} must be at least {1} characters in length"),
        ("min", ValueKind::Number, "{0} must be {1} or greater"),
        ("min", ValueKind::List, "{0} must contain at least {1} items"),
        ("max", ValueKind::String, "{0} must be a maximum of {1} characters in length"),
        ("max", ValueKind::Number, "{0} must be {1} or less"),
        ("max", ValueKind::List, "{0} must contain at maximum {1} items"),
        ("gt", ValueKind::String, "{0} must be greater than {1} characters in length"),
        ("gt", ValueKind::List, "{0} must contain more than {1} items"),
        ("gte", ValueKind::String, "{0} must be at least {1} characters in length"),
        ("gte", ValueKind::List, "{0} must contain at least {1} items"),
        ("lt", ValueKind::String, "{0} must be less than {1} characters in length"),
        ("lt", ValueKind::List, "{0} must contain less than {1} items"),
        ("lte", ValueKind::String, "{0} must be at maximum {1} characters in length"),
        ("lte", ValueKind::List, "{0} must contain at maximum {1} items"),
    ],
};
