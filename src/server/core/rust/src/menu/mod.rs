/* src/server/core/rust/src/menu/mod.rs */

// Navigation tree as served by `GET /misc/menu`, normalized to one recursive node type.

mod normalize;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::content::EntityKind;
use crate::locale::{Locale, localize_path};
use crate::localized::LocalizedString;
use crate::routing::RoutingTable;
use crate::sitemap::LocalizedPair;

const FALLBACK_MENU: &str = include_str!("fallback.json");

/// A link target. Plain links denote the same logical path in every locale;
/// localized links carry an explicit path per locale, either of which may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Href {
  Plain(String),
  Localized { az: Option<String>, en: Option<String> },
}

/// Menu link to a CMS page entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
  pub id: String,
  #[serde(default)]
  pub slug: Option<LocalizedString>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MenuLink {
  Href { href: Href },
  Page { page: PageRef },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
  pub id: String,
  pub label: LocalizedString,
  pub link: Option<MenuLink>,
  pub children: Vec<MenuNode>,
}

/// Root nodes are the menu categories, in API order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTree {
  pub roots: Vec<MenuNode>,
}

/// One rendered navigation entry for a single locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
  pub id: String,
  pub label: String,
  pub href: Option<String>,
  pub external: bool,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub children: Vec<NavItem>,
}

pub(crate) fn is_external(href: &str) -> bool {
  ["http://", "https://", "mailto:", "tel:", "//"].iter().any(|p| href.starts_with(p))
}

impl Href {
  /// Paths of this link per locale. External links are not site paths and yield nothing.
  pub fn localized_pair(&self, table: &RoutingTable) -> Option<LocalizedPair> {
    match self {
      Href::Plain(path) if is_external(path) => None,
      Href::Plain(path) => Some(LocalizedPair {
        az: Some(table.switch_locale_path(path, Locale::Az)),
        en: Some(table.switch_locale_path(path, Locale::En)),
      }),
      Href::Localized { az, en } => {
        let internal = |v: &Option<String>| v.clone().filter(|s| !s.is_empty() && !is_external(s));
        let pair = LocalizedPair { az: internal(az), en: internal(en) };
        if pair.az.is_none() && pair.en.is_none() { None } else { Some(pair) }
      }
    }
  }

  /// Target for `locale`. A localized link missing that locale is derived from the other one.
  pub fn resolve(&self, locale: Locale, table: &RoutingTable) -> Option<String> {
    match self {
      Href::Plain(path) if is_external(path) => Some(path.clone()),
      Href::Plain(path) => Some(table.switch_locale_path(path, locale)),
      Href::Localized { az, en } => {
        let pick = |l: Locale| match l {
          Locale::Az => az.as_deref(),
          Locale::En => en.as_deref(),
        };
        let non_empty = |v: Option<&str>| v.filter(|s| !s.is_empty()).map(String::from);
        non_empty(pick(locale)).or_else(|| {
          let other = non_empty(pick(locale.other()))?;
          if is_external(&other) { Some(other) } else { Some(table.switch_locale_path(&other, locale)) }
        })
      }
    }
  }
}

impl PageRef {
  pub fn resolve(&self, locale: Locale, table: &RoutingTable) -> Option<String> {
    let slug = self.slug.as_ref()?.get(locale);
    if slug.is_empty() {
      return None;
    }
    Some(localize_path(&table.entity_path(EntityKind::Page, slug, locale), locale))
  }
}

impl MenuNode {
  pub fn href(&self) -> Option<&Href> {
    match self.link {
      Some(MenuLink::Href { ref href }) => Some(href),
      _ => None,
    }
  }

  fn project(&self, locale: Locale, table: &RoutingTable) -> NavItem {
    let href = match self.link {
      Some(MenuLink::Href { ref href }) => href.resolve(locale, table),
      Some(MenuLink::Page { ref page }) => page.resolve(locale, table),
      None => None,
    };
    NavItem {
      id: self.id.clone(),
      label: self.label.get(locale).to_string(),
      external: href.as_deref().is_some_and(is_external),
      href,
      children: self.children.iter().map(|c| c.project(locale, table)).collect(),
    }
  }
}

impl MenuTree {
  /// Normalize a `GET /misc/menu` body. Accepts the `{ data: {...} }` envelope or the bare map.
  pub fn from_value(value: &serde_json::Value) -> Result<Self, crate::errors::FetchError> {
    normalize::menu_tree(value)
  }

  /// Menu bundled with the binary, served when the Content API is unavailable.
  pub fn fallback() -> Self {
    match serde_json::from_str::<serde_json::Value>(FALLBACK_MENU)
      .map_err(|e| crate::errors::FetchError::Decode(e.to_string()))
      .and_then(|v| Self::from_value(&v))
    {
      Ok(tree) => tree,
      Err(e) => {
        tracing::error!(error = %e, "bundled fallback menu is invalid");
        Self::default()
      }
    }
  }

  /// Depth-first, pre-order iteration over every node.
  pub fn walk(&self) -> impl Iterator<Item = &MenuNode> {
    let mut stack: Vec<&MenuNode> = self.roots.iter().rev().collect();
    std::iter::from_fn(move || {
      let node = stack.pop()?;
      stack.extend(node.children.iter().rev());
      Some(node)
    })
  }
}

/// Render the menu for one locale.
pub fn project_navigation(tree: &MenuTree, locale: Locale, table: &RoutingTable) -> Vec<NavItem> {
  tree.roots.iter().map(|n| n.project(locale, table)).collect()
}
