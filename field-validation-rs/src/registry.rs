//! Rule registry
//!
//! Rules are registered once while the [`ValidationContext`](crate::ValidationContext)
//! is being built. Afterwards the registry is only reachable through shared
//! references, so lookups need no synchronization.

use crate::errors::{EngineError, EngineResult};
use crate::validators;
use crate::value::FieldValue;
use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Predicate deciding whether a field value satisfies a rule
pub type Predicate = Arc<dyn Fn(&FieldValue, &[String]) -> bool + Send + Sync>;

/// A named predicate with its default message template
#[derive(Clone)]
pub struct Rule {
    name: String,
    predicate: Predicate,
    default_template: String,
}

impl Rule {
    /// Create a new rule
    pub fn new<F>(name: impl Into<String>, predicate: F, default_template: impl Into<String>) -> Self
    where
        F: Fn(&FieldValue, &[String]) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
            default_template: default_template.into(),
        }
    }

    /// Rule name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Template used when no catalog entry matches
    pub fn default_template(&self) -> &str {
        &self.default_template
    }

    /// Evaluate the rule. A predicate that panics counts as a failure.
    pub fn check(&self, value: &FieldValue, params: &[String]) -> bool {
        match panic::catch_unwind(AssertUnwindSafe(|| (self.predicate)(value, params))) {
            Ok(passed) => passed,
            Err(_) => {
                log::warn!("Rule '{}' panicked, treating value as invalid", self.name);
                false
            }
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("default_template", &self.default_template)
            .finish_non_exhaustive()
    }
}

/// Table of rules keyed by name
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Rule>,
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in rule
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, predicate, template) in validators::BUILTIN_RULES {
            registry.rules.insert(
                (*name).to_string(),
                Rule::new(*name, *predicate, *template),
            );
        }
        log::debug!("Registered {} built-in rules", registry.len());
        registry
    }

    /// Register a rule. Names are unique.
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        predicate: F,
        default_template: impl Into<String>,
    ) -> EngineResult<()>
    where
        F: Fn(&FieldValue, &[String]) -> bool + Send + Sync + 'static,
    {
        self.insert(Rule::new(name, predicate, default_template))
    }

    /// Register an already constructed rule
    pub fn insert(&mut self, rule: Rule) -> EngineResult<()> {
        if self.rules.contains_key(rule.name()) {
            return Err(EngineError::DuplicateRule(rule.name().to_string()));
        }

        log::debug!("Registered rule '{}'", rule.name());
        self.rules.insert(rule.name().to_string(), rule);
        Ok(())
    }

    /// Find a rule by name
    pub fn lookup(&self, name: &str) -> EngineResult<&Rule> {
        self.rules
            .get(name)
            .ok_or_else(|| EngineError::UnknownRule(name.to_string()))
    }

    /// Returns true if a rule with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
