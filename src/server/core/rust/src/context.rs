/* src/server/core/rust/src/context.rs */

use serde::Serialize;

use crate::content::EntityKind;
use crate::locale::{Locale, localize_path};
use crate::routing::RoutingTable;

/// Per-request record of the entity slugs a locale switch should land on.
///
/// Created fresh for every page render and handed down the call chain; never stored
/// process-wide. Whoever navigates to another entity or a static route must call
/// [`AlternateSlugContext::clear`] (the resolver does this for every resolution it makes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlternateSlugContext {
  kind: Option<EntityKind>,
  az: Option<String>,
  en: Option<String>,
}

impl AlternateSlugContext {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record the slugs of the entity currently on screen, replacing any previous entity.
  pub fn set_entity(&mut self, kind: EntityKind, current: (Locale, &str), alternate: Option<&str>) {
    self.clear();
    self.kind = Some(kind);
    let (locale, slug) = current;
    self.set(locale, Some(slug.to_string()));
    self.set(locale.other(), alternate.map(String::from));
  }

  pub fn clear(&mut self) {
    *self = Self::default();
  }

  pub fn is_empty(&self) -> bool {
    self.kind.is_none() && self.az.is_none() && self.en.is_none()
  }

  pub fn kind(&self) -> Option<EntityKind> {
    self.kind
  }

  pub fn get(&self, locale: Locale) -> Option<&str> {
    match locale {
      Locale::Az => self.az.as_deref(),
      Locale::En => self.en.as_deref(),
    }
  }

  fn set(&mut self, locale: Locale, slug: Option<String>) {
    match locale {
      Locale::Az => self.az = slug,
      Locale::En => self.en = slug,
    }
  }

  /// Target of the locale switch from `public_path` to `target`.
  ///
  /// With an entity in context the link goes to the same entity in `target`; otherwise
  /// the path is translated segment by segment.
  pub fn switch_href(&self, public_path: &str, target: Locale, table: &RoutingTable) -> String {
    if let (Some(kind), Some(slug)) = (self.kind, self.get(target)) {
      return localize_path(&table.entity_path(kind, slug, target), target);
    }
    table.switch_locale_path(public_path, target)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn set_entity_records_both_locales() {
    let mut ctx = AlternateSlugContext::new();
    ctx.set_entity(EntityKind::News, (Locale::Az, "yeni-bina"), Some("new-building"));
    assert_eq!(ctx.get(Locale::Az), Some("yeni-bina"));
    assert_eq!(ctx.get(Locale::En), Some("new-building"));
    assert_eq!(ctx.kind(), Some(EntityKind::News));
  }

  #[test]
  fn set_entity_replaces_previous_entity() {
    let mut ctx = AlternateSlugContext::new();
    ctx.set_entity(EntityKind::News, (Locale::Az, "a"), Some("a-en"));
    ctx.set_entity(EntityKind::Event, (Locale::En, "b-en"), None);
    assert_eq!(ctx.get(Locale::Az), None);
    assert_eq!(ctx.get(Locale::En), Some("b-en"));
    assert_eq!(ctx.kind(), Some(EntityKind::Event));
  }

  #[test]
  fn clear_leaves_nothing_behind() {
    let mut ctx = AlternateSlugContext::new();
    ctx.set_entity(EntityKind::Page, (Locale::Az, "haqqimizda"), Some("about-us"));
    ctx.clear();
    assert!(ctx.is_empty());
  }

  #[test]
  fn switch_uses_alternate_slug() {
    let table = RoutingTable::builtin();
    let mut ctx = AlternateSlugContext::new();
    ctx.set_entity(EntityKind::News, (Locale::Az, "yeni-bina"), Some("new-building"));
    assert_eq!(ctx.switch_href("/xeberler/yeni-bina", Locale::En, &table), "/en/news/new-building");
    assert_eq!(ctx.switch_href("/xeberler/yeni-bina", Locale::Az, &table), "/xeberler/yeni-bina");
  }

  #[test]
  fn switch_without_entity_translates_path() {
    let table = RoutingTable::builtin();
    let ctx = AlternateSlugContext::new();
    assert_eq!(ctx.switch_href("/universitet/tarix", Locale::En, &table), "/en/university/history");
  }
}
