//! Locale-tagged string tables and the four-step fallback resolution rule.
//!
//! Locale-tagged fields (`name`, `summary`, `keywords`, …) are modelled as
//! `BTreeMap<Locale, T>` rather than a `HashMap` so that emit is
//! deterministic (`C` first, then lexicographic) without a separate sort
//! step.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The untranslated/default locale key.
pub const DEFAULT_LOCALE: &str = "C";

/// Sentinel locale requesting that every translation be retained, used by
/// both codecs on parse (retain every `xml:lang`/YAML key) and on emit
/// (serialize every key) instead of resolving to a single value.
pub const ALL_LOCALES: &str = "ALL";

/// Strips the region/modifier from a locale tag: `pt_BR.UTF-8@euro` -> `pt`.
pub fn language_only(locale: &str) -> &str {
    let locale = locale.split('.').next().unwrap_or(locale);
    let locale = locale.split('@').next().unwrap_or(locale);
    locale.split(['_', '-']).next().unwrap_or(locale)
}

/// Whether a locale tag should be dropped outright on ingest: the
/// specification singles out `x-test`, `xx` and the empty string.
pub fn is_discarded_locale(locale: &str) -> bool {
    matches!(locale, "" | "x-test" | "xx")
}

/// Four-step fallback resolution: exact match, language-stripped match,
/// `"C"`, then `None`.
pub fn resolve<'a, T>(table: &'a BTreeMap<String, T>, locale: &str) -> Option<&'a T> {
    if let Some(value) = table.get(locale) {
        return Some(value);
    }
    let stripped = language_only(locale);
    if stripped != locale {
        if let Some(value) = table.get(stripped) {
            return Some(value);
        }
    }
    if let Some(value) = table.get(DEFAULT_LOCALE) {
        return Some(value);
    }
    None
}

/// A short locale-tagged string (`name`, `summary`, captions, …).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslatableString(pub BTreeMap<String, String>);

impl TranslatableString {
    /// Builds a string with only the untranslated (`C`) value set.
    pub fn with_default(text: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        let text = text.into();
        if !text.is_empty() {
            map.insert(DEFAULT_LOCALE.to_string(), text);
        }
        Self(map)
    }

    /// Chainable setter mirroring `set(locale, value)`, used heavily by
    /// builders and test fixtures.
    #[must_use]
    pub fn and_locale(mut self, locale: &str, text: impl Into<String>) -> Self {
        self.set(locale, text);
        self
    }

    /// Places `text` under `locale`, dropping it silently if it is empty or
    /// a discarded locale (`x-test`/`xx`/empty). Re-declaring a locale
    /// replaces the prior value, per the Component invariant that exactly
    /// one value exists per `(field, language)` pair.
    pub fn set(&mut self, locale: &str, text: impl Into<String>) {
        if is_discarded_locale(locale) {
            return;
        }
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.0.insert(locale.to_string(), text);
    }

    /// Sets the untranslated value.
    pub fn set_default(&mut self, text: impl Into<String>) {
        self.set(DEFAULT_LOCALE, text);
    }

    /// Resolves the best value for `locale` per the four-step fallback.
    pub fn get(&self, locale: &str) -> Option<&str> {
        resolve(&self.0, locale).map(String::as_str)
    }

    /// The untranslated value, if any.
    pub fn default_value(&self) -> Option<&str> {
        self.0.get(DEFAULT_LOCALE).map(String::as_str)
    }

    /// Whether no locale has a value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A locale-tagged ordered list of strings (`keywords`).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslatableList(pub BTreeMap<String, Vec<String>>);

impl TranslatableList {
    /// Builds a list with only the untranslated (`C`) entries set.
    pub fn with_default(items: Vec<impl Into<String>>) -> Self {
        let mut map = BTreeMap::new();
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if !items.is_empty() {
            map.insert(DEFAULT_LOCALE.to_string(), items);
        }
        Self(map)
    }

    /// Chainable setter used by test fixtures.
    #[must_use]
    pub fn and_locale(mut self, locale: &str, items: Vec<impl Into<String>>) -> Self {
        self.set(locale, items.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the entries for `locale`. Discarded locales are ignored, as
    /// is an empty list.
    pub fn set(&mut self, locale: &str, items: Vec<String>) {
        if is_discarded_locale(locale) || items.is_empty() {
            return;
        }
        self.0.insert(locale.to_string(), items);
    }

    /// Appends a single item to `locale`'s list, dropping empty strings.
    pub fn push(&mut self, locale: &str, item: impl Into<String>) {
        if is_discarded_locale(locale) {
            return;
        }
        let item = item.into();
        if item.is_empty() {
            return;
        }
        self.0.entry(locale.to_string()).or_default().push(item);
    }

    /// Resolves the best list for `locale` per the four-step fallback.
    pub fn get(&self, locale: &str) -> Option<&[String]> {
        resolve(&self.0, locale).map(Vec::as_slice)
    }

    /// Whether no locale has entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_region_and_modifier() {
        assert_eq!(language_only("pt_BR.UTF-8@euro"), "pt");
        assert_eq!(language_only("de_DE"), "de");
        assert_eq!(language_only("fr"), "fr");
    }

    #[test]
    fn discards_x_test_and_xx_and_empty() {
        assert!(is_discarded_locale("x-test"));
        assert!(is_discarded_locale("xx"));
        assert!(is_discarded_locale(""));
        assert!(!is_discarded_locale("de"));
    }

    #[test]
    fn fallback_resolves_language_only_then_c() {
        let mut s = TranslatableString::default();
        s.set("de", "Hallo");
        assert_eq!(s.get("de_DE"), Some("Hallo"));

        let mut s2 = TranslatableString::default();
        s2.set_default("Hello");
        assert_eq!(s2.get("fr"), Some("Hello"));

        let s3 = TranslatableString::default();
        assert_eq!(s3.get("fr"), None);
    }

    #[test]
    fn redeclaring_a_locale_replaces_the_value() {
        let mut s = TranslatableString::default();
        s.set("de", "Eins");
        s.set("de", "Zwei");
        assert_eq!(s.get("de"), Some("Zwei"));
    }

    #[test]
    fn empty_value_is_dropped_silently() {
        let mut s = TranslatableString::default();
        s.set("de", "");
        assert!(s.is_empty());
    }
}
