//! Translation catalog
//!
//! Message templates are stored per locale and rule name, optionally refined
//! by the [`ValueKind`] of the offending value (so `min` can read "at least 4
//! characters" for text and "at least 4" for numbers). Lookups fall back from
//! the kind-specific entry to the generic one, and from there to the rule's
//! own default template.
//!
//! Templates reference the field label as `{0}` and the n-th rule parameter
//! as `{n}`. Rendering is a single pass of literal substitution.

use crate::locales;
use crate::registry::Rule;
use crate::value::ValueKind;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct Entry {
    generic: Option<String>,
    by_kind: HashMap<ValueKind, String>,
}

/// Per-locale message templates keyed by rule name
#[derive(Debug, Clone, Default)]
pub struct TranslationCatalog {
    locales: HashMap<String, HashMap<String, Entry>>,
}

impl TranslationCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding every bundled locale
    pub fn with_builtin_locales() -> Self {
        let mut catalog = Self::new();
        for bundle in locales::BUNDLES {
            catalog.load(bundle);
        }
        catalog
    }

    /// Add every template of a locale bundle
    pub fn load(&mut self, bundle: &locales::LocaleBundle) {
        for (rule, template) in bundle.messages {
            self.add(bundle.locale, *rule, *template);
        }
        for (rule, kind, template) in bundle.kind_messages {
            self.add_for_kind(bundle.locale, *rule, *kind, *template);
        }
        log::debug!(
            "Loaded locale '{}' ({} messages)",
            bundle.locale,
            bundle.messages.len() + bundle.kind_messages.len()
        );
    }

    /// Set the template of a rule for a locale
    pub fn add(
        &mut self,
        locale: impl Into<String>,
        rule: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.entry(locale.into(), rule.into()).generic = Some(template.into());
    }

    /// Set the template of a rule for a locale and value kind
    pub fn add_for_kind(
        &mut self,
        locale: impl Into<String>,
        rule: impl Into<String>,
        kind: ValueKind,
        template: impl Into<String>,
    ) {
        self.entry(locale.into(), rule.into())
            .by_kind
            .insert(kind, template.into());
    }

    fn entry(&mut self, locale: String, rule: String) -> &mut Entry {
        self.locales
            .entry(locale)
            .or_default()
            .entry(rule)
            .or_default()
    }

    /// Catalog template for a rule, most specific first
    pub fn template(&self, locale: &str, rule: &str, kind: ValueKind) -> Option<&str> {
        let entry = self.locales.get(locale)?.get(rule)?;
        entry
            .by_kind
            .get(&kind)
            .or(entry.generic.as_ref())
            .map(String::as_str)
    }

    /// Render the message for a failed rule
    pub fn translate(
        &self,
        locale: &str,
        rule: &Rule,
        kind: ValueKind,
        label: &str,
        params: &[String],
    ) -> String {
        let template = self
            .template(locale, rule.name(), kind)
            .unwrap_or_else(|| rule.default_template());
        render(template, label, params)
    }

    /// Returns true if at least one template exists for the locale
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Known locales, sorted
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }
}

/// Substitute `{0}` with the label and `{n}` with the n-th parameter.
///
/// Placeholders without a matching value are kept as written; substituted
/// text is never scanned again.
pub fn render(template: &str, label: &str, params: &[String]) -> String {
    let mut out = String::with_capacity(template.len() + label.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after.find('}').and_then(|close| {
            let index = after[..close].parse::<usize>().ok()?;
            let value = match index {
                0 => label,
                n => params.get(n - 1)?.as_str(),
            };
            Some((value, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
