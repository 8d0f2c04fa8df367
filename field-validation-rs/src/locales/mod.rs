//! Bundled message catalogs

pub mod en;
pub mod zh;

use crate::value::ValueKind;

/// Templates shipped for one locale
#[derive(Debug)]
pub struct LocaleBundle {
    pub locale: &'static str,
    /// `(rule, template)`
    pub messages: &'static [(&'static str, &'static str)],
    /// `(rule, kind, template)`, preferred over `messages` for that kind
    pub kind_messages: &'static [(&'static str, ValueKind, &'static str)],
}

/// Every bundled locale
pub const BUNDLES: &[LocaleBundle] = &[en::BUNDLE, zh::BUNDLE];
