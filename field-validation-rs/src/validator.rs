//! Validation loop
//!
//! Fields are evaluated in declaration order and, within a field, rules in
//! declaration order. An absent value records a single `required` violation
//! for its field unless the field declares `omitempty`, in which case its
//! rules are skipped.

use crate::errors::EngineResult;
use crate::input::FieldSource;
use crate::labels::LabelResolver;
use crate::registry::RuleRegistry;
use crate::schema::InputConstraintSpec;
use crate::validators::{OMITEMPTY, REQUIRED};
use crate::value::ValueKind;
use serde::Serialize;

/// How many violations to collect per field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationMode {
    /// Stop at the first failing rule of each field
    #[default]
    FirstFailure,
    /// Record every failing rule of every field
    Full,
}

/// A single failed rule application
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Identifier of the offending field
    pub field: String,
    /// Label used when rendering messages
    pub label: String,
    /// Name of the failed rule
    pub rule: String,
    /// Parameters the rule was declared with
    pub params: Vec<String>,
    /// Kind of the offending value
    pub kind: ValueKind,
}

/// Ordered violations of one validation call. Empty means valid.
///
/// Only the validator can add violations, so rendering functions can rely on
/// every entry referencing a field of the spec that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    /// Returns true if no rule failed
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// First violation in declaration order
    pub fn first(&self) -> Option<&Violation> {
        self.violations.first()
    }

    /// Violations of one field
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.field == field)
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// Evaluates constraint specs against input objects
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    registry: &'a RuleRegistry,
    labels: &'a LabelResolver,
    max_violations: usize,
}

impl<'a> Validator<'a> {
    pub fn new(registry: &'a RuleRegistry, labels: &'a LabelResolver) -> Self {
        Self {
            registry,
            labels,
            max_violations: 0,
        }
    }

    /// Stop collecting after `limit` violations in [`EvaluationMode::Full`]
    /// (0 means unlimited)
    pub fn with_max_violations(mut self, limit: usize) -> Self {
        self.max_violations = limit;
        self
    }

    /// Verify every rule referenced by the spec is registered
    pub fn check_spec(&self, spec: &InputConstraintSpec) -> EngineResult<()> {
        for name in spec.rule_names() {
            self.registry.lookup(name)?;
        }
        Ok(())
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
        self.check_spec(spec)?;

        let limit = match mode {
            EvaluationMode::Full if self.max_violations > 0 => Some(self.max_violations),
            _ => None,
        };
        let mut violations = Vec::new();

        for field in spec.fields() {
            if limit.is_some_and(|limit| violations.len() >= limit) {
                log::debug!(
                    "Violation limit {} reached, skipping remaining fields from '{}'",
                    self.max_violations,
                    field.identifier
                );
                break;
            }

            let value = input.field_value(&field.identifier);
            let label = field
                .label
                .as_deref()
                .unwrap_or_else(|| self.labels.resolve(&field.identifier));

            if value.is_absent() {
                if !field.has_rule(OMITEMPTY) {
                    log::trace!("Field '{}' is absent", field.identifier);
                    violations.push(Violation {
                        field: field.identifier.clone(),
                        label: label.to_string(),
                        rule: REQUIRED.to_string(),
                        params: Vec::new(),
                        kind: ValueKind::Absent,
                    });
                }
                continue;
            }

            for rule_ref in &field.rules {
                if limit.is_some_and(|limit| violations.len() >= limit) {
                    log::debug!(
                        "Violation limit {} reached in field '{}'",
                        self.max_violations,
                        field.identifier
                    );
                    break;
                }

                let rule = self.registry.lookup(&rule_ref.name)?;
                if rule.check(&value, &rule_ref.params) {
                    continue;
                }

                log::trace!("Field '{}' failed rule '{}'", field.identifier, rule.name());
                violations.push(Violation {
                    field: field.identifier.clone(),
                    label: label.to_string(),
                    rule: rule_ref.name.clone(),
                    params: rule_ref.params.clone(),
                    kind: value.kind(),
                });

                if mode == EvaluationMode::FirstFailure {
                    break;
                }
            }
        }

        Ok(ValidationResult { violations })
    }
}
