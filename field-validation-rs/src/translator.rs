//! Error translation
//!
//! Turns a [`ValidationResult`] into user facing messages, either the first
//! one or every message grouped by field.

use crate::catalog::TranslationCatalog;
use crate::errors::{EngineError, EngineResult};
use crate::registry::RuleRegistry;
use crate::validator::{ValidationResult, Violation};
use std::collections::BTreeMap;

/// Localized messages keyed by field identifier
pub type FieldMessages = BTreeMap<String, Vec<String>>;

/// Renders violations with a catalog
#[derive(Debug, Clone, Copy)]
pub struct ErrorTranslator<'a> {
    registry: &'a RuleRegistry,
    catalog: &'a TranslationCatalog,
}

impl<'a> ErrorTranslator<'a> {
    pub fn new(registry: &'a RuleRegistry, catalog: &'a TranslationCatalog) -> Self {
        Self { registry, catalog }
    }

    /// Localized message of one violation
    pub fn translate(&self, violation: &Violation, locale: &str) -> EngineResult<String> {
        let rule = self.registry.lookup(&violation.rule)?;
        Ok(self.catalog.translate(
            locale,
            rule,
            violation.kind,
            &violation.label,
            &violation.params,
        ))
    }

    /// Message of the first violation
    pub fn translate_first(&self, result: &ValidationResult, locale: &str) -> EngineResult<String> {
        let first = result.first().ok_or(EngineError::EmptyResult)?;
        self.translate(first, locale)
    }

    /// Every message, grouped by field in violation order
    pub fn translate_all(
        &self,
        result: &ValidationResult,
        locale: &str,
    ) -> EngineResult<FieldMessages> {
        let mut messages = FieldMessages::new();
        for violation in result {
            let message = self.translate(violation, locale)?;
            messages
                .entry(violation.field.clone())
                .or_default()
                .push(message);
        }
        Ok(messages)
    }
}
