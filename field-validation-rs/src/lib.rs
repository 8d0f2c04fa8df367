//! # Field Validation Library
//!
//! Rule-based validation of input objects with localized error messages.
//!
//! A [`ValidationContext`] bundles the rule registry, the translation catalog
//! and the field labels. It is built once at startup and then only read, so
//! it can be shared freely between request handlers.
//!
//! ## Features
//!
//! - Library rules for presence, length and range bounds, membership and
//!   common formats (email, URL, IP, UUID)
//! - Custom rules for mobile numbers, directories, usernames, passwords and
//!   snowflake IDs
//! - First-failure or full evaluation
//! - English and Simplified Chinese messages, with kind-specific wording
//!
//! ```
//! use field_validation_rs::prelude::*;
//! use serde_json::json;
//!
//! let context = ValidationContextBuilder::new().build();
//! let spec = InputConstraintSpec::builder()
//!     .tagged("username", "Username", "required,username")
//!     .tagged("mobile", "Mobile", "required,mobile")
//!     .build();
//!
//! let input = json!({ "username": "abc", "mobile": "13800138000" });
//! let result = context.validate_full(&input, &spec)?;
//!
//! assert!(!result.is_valid());
//! let messages = context.translate_all(&result, "en")?;
//! assert_eq!(messages["username"].len(), 1);
//! # Ok::<(), EngineError>(())
//! ```

mod builder;
mod catalog;
mod config;
mod context;
mod errors;
mod input;
mod labels;
mod registry;
mod schema;
mod translator;
mod validator;
mod value;
pub mod locales;
pub mod validators;

pub use builder::ValidationContextBuilder;
pub use catalog::{render, TranslationCatalog};
pub use config::ValidatorConfig;
pub use context::ValidationContext;
pub use errors::{EngineError, EngineResult};
pub use input::{FieldSource, SerializedInput};
pub use labels::LabelResolver;
pub use registry::{Predicate, Rule, RuleRegistry};
pub use schema::{FieldConstraint, InputConstraintSpec, RuleRef, SpecBuilder};
pub use translator::{ErrorTranslator, FieldMessages};
pub use validator::{EvaluationMode, ValidationResult, Validator, Violation};
pub use value::{FieldValue, ValueKind};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::builder::ValidationContextBuilder;
    pub use crate::context::ValidationContext;
    pub use crate::errors::{EngineError, EngineResult};
    pub use crate::input::{FieldSource, SerializedInput};
    pub use crate::schema::{FieldConstraint, InputConstraintSpec};
    pub use crate::translator::FieldMessages;
    pub use crate::validator::{EvaluationMode, ValidationResult};
    pub use crate::value::{FieldValue, ValueKind};
}

/// Version of the validation library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builder preloaded with the built-in rules, bundled locales and the
/// configuration found in the environment
pub fn builder() -> ValidationContextBuilder {
    ValidationContextBuilder::new().with_config(ValidatorConfig::from_env())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_has_builtins() {
        let context = builder().build();
        assert!(context.registry().contains("snowflake"));
        assert!(context.catalog().has_locale("zh"));
        assert!(!context.default_locale().is_empty());
    }
}
