/* src/server/core/rust/src/localized.rs */

use serde::{Deserialize, Deserializer, Serialize};

use crate::locale::Locale;

/// A user-facing string stored once per locale.
///
/// The Content API returns missing translations as empty strings; `null` and absent keys are
/// accepted too and read as empty. Reads through [`LocalizedString::get`] fall back to the
/// default locale when the requested one is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalizedString {
  #[serde(default, deserialize_with = "null_as_empty")]
  pub az: String,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub en: String,
}

impl LocalizedString {
  pub fn new(az: impl Into<String>, en: impl Into<String>) -> Self {
    Self { az: az.into(), en: en.into() }
  }

  /// Same value for every locale.
  pub fn uniform(value: impl Into<String>) -> Self {
    let value = value.into();
    Self { az: value.clone(), en: value }
  }

  /// Raw value for `locale`, `None` when empty.
  pub fn get_strict(&self, locale: Locale) -> Option<&str> {
    let value = match locale {
      Locale::Az => &self.az,
      Locale::En => &self.en,
    };
    if value.is_empty() { None } else { Some(value.as_str()) }
  }

  /// Value for `locale`, falling back to the default locale. Empty when both are empty.
  pub fn get(&self, locale: Locale) -> &str {
    self.get_strict(locale).or_else(|| self.get_strict(Locale::DEFAULT)).unwrap_or("")
  }

  pub fn set(&mut self, locale: Locale, value: impl Into<String>) {
    match locale {
      Locale::Az => self.az = value.into(),
      Locale::En => self.en = value.into(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.az.is_empty() && self.en.is_empty()
  }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn falls_back_to_default() {
    let s = LocalizedString::new("Tarix", "");
    assert_eq!(s.get(Locale::En), "Tarix");
    assert_eq!(s.get_strict(Locale::En), None);
  }

  #[test]
  fn secondary_does_not_backfill_default() {
    let s = LocalizedString::new("", "History");
    assert_eq!(s.get(Locale::Az), "");
    assert_eq!(s.get(Locale::En), "History");
  }

  #[test]
  fn deserialize_null_and_missing() {
    let s: LocalizedString = serde_json::from_str(r#"{"az": "Xəbərlər", "en": null}"#).unwrap();
    assert_eq!(s, LocalizedString::new("Xəbərlər", ""));
    let s: LocalizedString = serde_json::from_str(r#"{"az": "Xəbərlər"}"#).unwrap();
    assert_eq!(s.en, "");
  }

  #[test]
  fn set_per_locale() {
    let mut s = LocalizedString::default();
    s.set(Locale::En, "News");
    assert_eq!(s.en, "News");
    assert!(!s.is_empty());
  }
}
