//! Constraint specs
//!
//! An [`InputConstraintSpec`] lists, for one input type, which rules apply to
//! which field and in what order. Specs are built once (usually into a
//! `lazy_static`) and shared by every validation of that type.
//!
//! ```
//! use field_validation_rs::{FieldConstraint, InputConstraintSpec};
//!
//! let spec = InputConstraintSpec::builder()
//!     .field(FieldConstraint::new("username").label("Username").tag("required,username"))
//!     .field(FieldConstraint::new("age").rule_with("gte", ["18"]))
//!     .build();
//!
//! assert_eq!(spec.len(), 2);
//! ```

/// One rule application: a rule name plus its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRef {
    pub name: String,
    pub params: Vec<String>,
}

impl RuleRef {
    /// Rule without parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Rule with parameters
    pub fn with_params<I, S>(name: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a single `name` or `name=param` entry
    pub fn parse(entry: &str) -> Self {
        match entry.split_once('=') {
            Some((name, param)) => Self::with_params(name.trim(), [param.trim()]),
            None => Self::new(entry.trim()),
        }
    }

    /// Parse a comma separated rule list such as `required,min=4,max=20`
    pub fn parse_list(tag: &str) -> Vec<Self> {
        tag.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(Self::parse)
            .collect()
    }
}

/// Rules declared for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConstraint {
    pub identifier: String,
    pub label: Option<String>,
    pub rules: Vec<RuleRef>,
}

impl FieldConstraint {
    /// Create a field constraint without rules
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            label: None,
            rules: Vec::new(),
        }
    }

    /// Set the label shown in messages
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Append a rule without parameters
    pub fn rule(mut self, name: impl Into<String>) -> Self {
        self.rules.push(RuleRef::new(name));
        self
    }

    /// Append a rule with parameters
    pub fn rule_with<I, S>(mut self, name: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.push(RuleRef::with_params(name, params));
        self
    }

    /// Append the rules of a tag such as `required,min=4`
    pub fn tag(mut self, tag: &str) -> Self {
        self.rules.extend(RuleRef::parse_list(tag));
        self
    }

    /// Returns true if the field declares the rule
    pub fn has_rule(&self, name: &str) -> bool {
        self.rules.iter().any(|r| r.name == name)
    }
}

/// Ordered field constraints of one input type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputConstraintSpec {
    fields: Vec<FieldConstraint>,
}

impl InputConstraintSpec {
    /// Create a spec from field constraints, in declaration order
    pub fn new(fields: Vec<FieldConstraint>) -> Self {
        Self { fields }
    }

    /// Create a builder for a spec
    pub fn builder() -> SpecBuilder {
        SpecBuilder::new()
    }

    pub fn fields(&self) -> &[FieldConstraint] {
        &self.fields
    }

    /// Constraint of a field by identifier
    pub fn field(&self, identifier: &str) -> Option<&FieldConstraint> {
        self.fields.iter().find(|f| f.identifier == identifier)
    }

    /// Every rule name referenced by the spec, in declaration order
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .flat_map(|f| f.rules.iter().map(|r| r.name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder for constraint specs
#[derive(Debug, Default)]
pub struct SpecBuilder {
    fields: Vec<FieldConstraint>,
}

impl SpecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field constraint
    pub fn field(mut self, field: FieldConstraint) -> Self {
        self.fields.push(field);
        self
    }

    /// Append a labelled field whose rules are given as a tag
    pub fn tagged(self, identifier: &str, label: &str, tag: &str) -> Self {
        self.field(FieldConstraint::new(identifier).label(label).tag(tag))
    }

    /// Build the spec
    pub fn build(self) -> InputConstraintSpec {
        InputConstraintSpec::new(self.fields)
    }
}
