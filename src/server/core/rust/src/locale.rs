/* src/server/core/rust/src/locale.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported UI languages. `Az` is the default and is served without a path prefix.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  #[default]
  Az,
  En,
}

impl Locale {
  pub const DEFAULT: Locale = Locale::Az;
  pub const ALL: [Locale; 2] = [Locale::Az, Locale::En];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Az => "az",
      Self::En => "en",
    }
  }

  /// The one locale that is not `self`.
  pub fn other(self) -> Locale {
    match self {
      Self::Az => Self::En,
      Self::En => Self::Az,
    }
  }

  pub fn is_default(self) -> bool {
    self == Self::DEFAULT
  }

  /// Path prefix for this locale: empty for the default, `/en` otherwise.
  pub fn prefix(self) -> &'static str {
    match self {
      Self::Az => "",
      Self::En => "/en",
    }
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown locale \"{}\" (expected az or en)", self.0)
  }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
  type Err = UnknownLocale;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "az" => Ok(Self::Az),
      "en" => Ok(Self::En),
      _ => Err(UnknownLocale(s.to_string())),
    }
  }
}

/// Split a public path into its locale and the locale-free remainder.
/// `/en/university` -> (En, "/university"); `/universitet` -> (Az, "/universitet").
pub fn split_locale_prefix(path: &str) -> (Locale, &str) {
  for locale in Locale::ALL {
    if locale.is_default() {
      continue;
    }
    let prefix = locale.prefix();
    if let Some(rest) = path.strip_prefix(prefix) {
      if rest.is_empty() {
        return (locale, "/");
      }
      if rest.starts_with('/') {
        return (locale, rest);
      }
    }
  }
  (Locale::DEFAULT, path)
}

/// Prefix a locale-free path for `locale`. The default locale stays bare.
pub fn localize_path(path: &str, locale: Locale) -> String {
  let path = if path.is_empty() { "/" } else { path };
  match (locale.prefix(), path) {
    ("", p) => p.to_string(),
    (prefix, "/") => prefix.to_string(),
    (prefix, p) if p.starts_with('/') => format!("{prefix}{p}"),
    (prefix, p) => format!("{prefix}/{p}"),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn other_is_involution() {
    for locale in Locale::ALL {
      assert_eq!(locale.other().other(), locale);
      assert_ne!(locale.other(), locale);
    }
  }

  #[test]
  fn parse_and_display() {
    assert_eq!("az".parse::<Locale>(), Ok(Locale::Az));
    assert_eq!(" EN ".parse::<Locale>(), Ok(Locale::En));
    assert!("fr".parse::<Locale>().is_err());
    assert_eq!(Locale::En.to_string(), "en");
  }

  #[test]
  fn split_prefix() {
    assert_eq!(split_locale_prefix("/en/university"), (Locale::En, "/university"));
    assert_eq!(split_locale_prefix("/en"), (Locale::En, "/"));
    assert_eq!(split_locale_prefix("/en/"), (Locale::En, "/"));
    assert_eq!(split_locale_prefix("/universitet"), (Locale::Az, "/universitet"));
    // "/english" is not the en prefix
    assert_eq!(split_locale_prefix("/english"), (Locale::Az, "/english"));
    assert_eq!(split_locale_prefix("/"), (Locale::Az, "/"));
  }

  #[test]
  fn localize_default_is_bare() {
    assert_eq!(localize_path("/universitet", Locale::Az), "/universitet");
    assert_eq!(localize_path("/", Locale::Az), "/");
    assert_eq!(localize_path("/university", Locale::En), "/en/university");
    assert_eq!(localize_path("/", Locale::En), "/en");
    assert_eq!(localize_path("", Locale::En), "/en");
  }

  #[test]
  fn serde_lowercase() {
    assert_eq!(serde_json::to_string(&Locale::Az).unwrap(), "\"az\"");
    let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
    assert_eq!(parsed, Locale::En);
  }
}
