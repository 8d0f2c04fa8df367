//! Engine configuration
//!
//! Settings are read from the environment (and a `.env` file when present)
//! with a warning and fallback for values that do not parse.

use std::env;

/// Environment variable holding the default locale
pub const DEFAULT_LOCALE_VAR: &str = "VALIDATOR_DEFAULT_LOCALE";

/// Environment variable holding the violation cap
pub const MAX_VIOLATIONS_VAR: &str = "VALIDATOR_MAX_VIOLATIONS";

/// Locale used when none is configured
pub const DEFAULT_LOCALE: &str = "en";

/// Configuration for the validation engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Locale used by the `*_default_locale` rendering helpers
    pub default_locale: String,
    /// Maximum number of violations collected per call, 0 for unlimited
    pub max_violations: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            max_violations: 0,
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_locale = match lookup(DEFAULT_LOCALE_VAR) {
            Some(locale) if !locale.trim().is_empty() => locale.trim().to_string(),
            Some(_) => {
                log::warn!("Empty {}, using default {}", DEFAULT_LOCALE_VAR, defaults.default_locale);
                defaults.default_locale
            }
            None => defaults.default_locale,
        };

        let max_violations = match lookup(MAX_VIOLATIONS_VAR) {
            Some(raw) => raw.trim().parse::<usize>().unwrap_or_else(|_| {
                log::warn!(
                    "Invalid value in {}, using default {}",
                    MAX_VIOLATIONS_VAR,
                    defaults.max_violations
                );
                defaults.max_violations
            }),
            None => defaults.max_violations,
        };

        Self {
            default_locale,
            max_violations,
        }
    }

    /// Set the default locale
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Set the violation cap
    pub fn with_max_violations(mut self, limit: usize) -> Self {
        self.max_violations = limit;
        self
    }
}
