//! Validation context
//!
//! The immutable bundle of rules, translations, labels and configuration
//! produced by [`ValidationContextBuilder`](crate::ValidationContextBuilder).
//! Build it once at startup and pass it by reference (or in an `Arc`) to
//! every request handler.

use crate::catalog::TranslationCatalog;
use crate::config::ValidatorConfig;
use crate::errors::EngineResult;
use crate::input::FieldSource;
use crate::labels::LabelResolver;
use crate::registry::RuleRegistry;
use crate::schema::InputConstraintSpec;
use crate::translator::{ErrorTranslator, FieldMessages};
use crate::validator::{EvaluationMode, ValidationResult, Validator};
use crate::value::ValueKind;

/// Read-only rules, translations and labels shared by all validations
#[derive(Debug)]
pub struct ValidationContext {
    registry: RuleRegistry,
    catalog: TranslationCatalog,
    labels: LabelResolver,
    config: ValidatorConfig,
}

impl ValidationContext {
    pub(crate) fn new(
        registry: RuleRegistry,
        catalog: TranslationCatalog,
        labels: LabelResolver,
        config: ValidatorConfig,
    ) -> Self {
        Self {
            registry,
            catalog,
            labels,
            config,
        }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &TranslationCatalog {
        &self.catalog
    }

    pub fn labels(&self) -> &LabelResolver {
        &self.labels
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Locale used by the `*_default_locale` helpers
    pub fn default_locale(&self) -> &str {
        &self.config.default_locale
    }

    /// Validator bound to this context
    pub fn validator(&self) -> Validator<'_> {
        Validator::new(&self.registry, &self.labels).with_max_violations(self.config.max_violations)
    }

    /// Translator bound to this context
    pub fn translator(&self) -> ErrorTranslator<'_> {
        ErrorTranslator::new(&self.registry, &self.catalog)
    }

    /// Verify every rule referenced by the spec is registered
    pub fn check_spec(&self, spec: &InputConstraintSpec) -> EngineResult<()> {
        self.validator().check_spec(spec)
    }

    /// Evaluate `spec` against `input`
    pub fn validate<I>(
        &self,
        input: &I,
        spec: &InputConstraintSpec,
        mode: EvaluationMode,
    ) -> EngineResult<ValidationResult>
    where
        I: FieldSource + ?Sized,
    {
        self.validator().validate(input, spec, mode)
    }

    /// Validate keeping only the first failure of each field
    pub fn validate_first<I>(&self, input: &I, spec: &InputConstraintSpec) -> EngineResult<ValidationResult>
    where
        I: FieldSource + ?Sized,
    {
        self.validate(input, spec, EvaluationMode::FirstFailure)
    }

    /// Validate collecting every failure
    pub fn validate_full<I>(&self, input: &I, spec: &InputConstraintSpec) -> EngineResult<ValidationResult>
    where
        I: FieldSource + ?Sized,
    {
        self.validate(input, spec, EvaluationMode::Full)
    }

    /// Render the message of one rule for a label and parameters
    pub fn translate(
        &self,
        locale: &str,
        rule: &str,
        kind: ValueKind,
        label: &str,
        params: &[String],
    ) -> EngineResult<String> {
        let rule = self.registry.lookup(rule)?;
        Ok(self.catalog.translate(locale, rule, kind, label, params))
    }

    /// Message of the first violation
    pub fn translate_first(&self, result: &ValidationResult, locale: &str) -> EngineResult<String> {
        self.translator().translate_first(result, locale)
    }

    /// Messages grouped by field
    pub fn translate_all(&self, result: &ValidationResult, locale: &str) -> EngineResult<FieldMessages> {
        self.translator().translate_all(result, locale)
    }

    pub fn translate_first_default_locale(&self, result: &ValidationResult) -> EngineResult<String> {
        self.translate_first(result, self.default_locale())
    }

    pub fn translate_all_default_locale(&self, result: &ValidationResult) -> EngineResult<FieldMessages> {
        self.translate_all(result, self.default_locale())
    }
}
