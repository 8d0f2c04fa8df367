//! Context builder
//!
//! All registration happens here, before any validation runs. Building
//! consumes the builder, so the resulting [`ValidationContext`] can no longer
//! be changed and is safe to share between threads.

use crate::catalog::TranslationCatalog;
use crate::config::ValidatorConfig;
use crate::context::ValidationContext;
use crate::errors::EngineResult;
use crate::labels::LabelResolver;
use crate::registry::RuleRegistry;
use crate::value::{FieldValue, ValueKind};

/// Builder collecting rules, translations and labels
#[derive(Debug, Clone)]
pub struct ValidationContextBuilder {
    registry: RuleRegistry,
    catalog: TranslationCatalog,
    labels: LabelResolver,
    config: ValidatorConfig,
}

impl Default for ValidationContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationContextBuilder {
    /// Start from the built-in rules and bundled locales
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_builtins(),
            catalog: TranslationCatalog::with_builtin_locales(),
            labels: LabelResolver::new(),
            config: ValidatorConfig::default(),
        }
    }

    /// Start without any rule or translation
    pub fn empty() -> Self {
        Self {
            registry: RuleRegistry::new(),
            catalog: TranslationCatalog::new(),
            labels: LabelResolver::new(),
            config: ValidatorConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a custom rule. Fails if the name is taken.
    pub fn register_rule<F>(
        mut self,
        name: impl Into<String>,
        predicate: F,
        default_template: impl Into<String>,
    ) -> EngineResult<Self>
    where
        F: Fn(&FieldValue, &[String]) -> bool + Send + Sync + 'static,
    {
        self.registry.register(name, predicate, default_template)?;
        Ok(self)
    }

    /// Add or replace the template of a rule for a locale
    pub fn add_translation(
        mut self,
        locale: impl Into<String>,
        rule: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.catalog.add(locale, rule, template);
        self
    }

    /// Add or replace the template of a rule for a locale and value kind
    pub fn add_kind_translation(
        mut self,
        locale: impl Into<String>,
        rule: impl Into<String>,
        kind: ValueKind,
        template: impl Into<String>,
    ) -> Self {
        self.catalog.add_for_kind(locale, rule, kind, template);
        self
    }

    /// Declare the label of a field
    pub fn set_label(mut self, identifier: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.set(identifier, label);
        self
    }

    /// Freeze everything into a context
    pub fn build(self) -> ValidationContext {
        if !self.catalog.has_locale(&self.config.default_locale) {
            log::debug!(
                "Default locale '{}' has no catalog entries, rule templates will be used",
                self.config.default_locale
            );
        }
        log::debug!(
            "Validation context ready: {} rules, locales {:?}",
            self.registry.len(),
            self.catalog.locales()
        );

        ValidationContext::new(self.registry, self.catalog, self.labels, self.config)
    }
}
