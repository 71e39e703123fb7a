/* src/server/core/rust/src/routing/mod.rs */

// Bidirectional az <-> en path segment table and the static route list built on it.

mod builtin;


use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::content::EntityKind;
use crate::errors::RoutingError;
use crate::locale::{Locale, localize_path, split_locale_prefix};

/// One semantic route node spelled in each locale, e.g. `university` = `universitet` / `university`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSegmentMapping {
  pub key: String,
  pub az: String,
  pub en: String,
}

impl RouteSegmentMapping {
  pub fn new(key: impl Into<String>, az: impl Into<String>, en: impl Into<String>) -> Self {
    Self { key: key.into(), az: az.into(), en: en.into() }
  }

  pub fn get(&self, locale: Locale) -> &str {
    match locale {
      Locale::Az => &self.az,
      Locale::En => &self.en,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
  Daily,
  Weekly,
  Monthly,
}

impl ChangeFrequency {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Daily => "daily",
      Self::Weekly => "weekly",
      Self::Monthly => "monthly",
    }
  }
}

/// A hand-authored page addressed by a fixed sequence of segment keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticRoute {
  pub key: String,
  /// Segment keys from root; empty for the home page.
  pub segments: Vec<String>,
  /// Collection rendered on this page, if it is a listing.
  #[serde(default)]
  pub listing: Option<EntityKind>,
  /// Category filter applied to the listing.
  #[serde(default)]
  pub category: Option<String>,
  pub change_frequency: ChangeFrequency,
  pub priority: f32,
}

impl StaticRoute {
  pub fn new(key: &str, segments: &[&str], change_frequency: ChangeFrequency, priority: f32) -> Self {
    Self {
      key: key.to_string(),
      segments: segments.iter().map(|s| (*s).to_string()).collect(),
      listing: None,
      category: None,
      change_frequency,
      priority,
    }
  }

  pub fn listing(mut self, kind: EntityKind, category: Option<&str>) -> Self {
    self.listing = Some(kind);
    self.category = category.map(String::from);
    self
  }
}

/// Immutable after construction; share it behind `Arc` across requests.
#[derive(Debug, Clone)]
pub struct RoutingTable {
  mappings: Vec<RouteSegmentMapping>,
  /// Segment string in either locale -> mapping index.
  by_segment: HashMap<String, usize>,
  by_key: HashMap<String, usize>,
  static_routes: Vec<StaticRoute>,
  /// (locale, locale-free path) -> static route index.
  static_index: HashMap<(Locale, String), usize>,
}

impl RoutingTable {
  /// Validate and index. Fails when a segment string would map to two route nodes,
  /// which would break `az -> en -> az` round-trips.
  pub fn new(
    mappings: Vec<RouteSegmentMapping>,
    static_routes: Vec<StaticRoute>,
  ) -> Result<Self, RoutingError> {
    validate(&mappings, &static_routes)?;
    Ok(Self::assemble(mappings, static_routes))
  }

  /// The university's built-in segment table and static pages.
  pub fn builtin() -> Self {
    Self::assemble(builtin::mappings(), builtin::static_routes())
  }

  /// Layer additional mappings on top of this table.
  pub fn with_mappings(self, extra: Vec<RouteSegmentMapping>) -> Result<Self, RoutingError> {
    let mut mappings = self.mappings;
    mappings.extend(extra);
    Self::new(mappings, self.static_routes)
  }

  pub fn with_static_routes(self, extra: Vec<StaticRoute>) -> Result<Self, RoutingError> {
    let mut routes = self.static_routes;
    routes.extend(extra);
    Self::new(self.mappings, routes)
  }

  fn assemble(mappings: Vec<RouteSegmentMapping>, static_routes: Vec<StaticRoute>) -> Self {
    let mut by_segment = HashMap::new();
    let mut by_key = HashMap::new();
    for (i, m) in mappings.iter().enumerate() {
      by_key.entry(m.key.clone()).or_insert(i);
      by_segment.entry(m.az.clone()).or_insert(i);
      by_segment.entry(m.en.clone()).or_insert(i);
    }

    let mut table = Self {
      mappings,
      by_segment,
      by_key,
      static_routes: Vec::new(),
      static_index: HashMap::new(),
    };
    for (i, route) in static_routes.iter().enumerate() {
      for locale in Locale::ALL {
        let path = table.route_path(route, locale);
        table.static_index.entry((locale, path)).or_insert(i);
      }
    }
    table.static_routes = static_routes;
    table
  }

  pub fn mappings(&self) -> &[RouteSegmentMapping] {
    &self.mappings
  }

  pub fn static_routes(&self) -> &[StaticRoute] {
    &self.static_routes
  }

  pub fn mapping(&self, key: &str) -> Option<&RouteSegmentMapping> {
    self.by_key.get(key).map(|&i| &self.mappings[i])
  }

  /// Spelling of segment `key` in `locale`; unknown keys are used verbatim.
  pub fn segment<'a>(&'a self, key: &'a str, locale: Locale) -> &'a str {
    self.mapping(key).map_or(key, |m| m.get(locale))
  }

  /// Translate one path segment. Unmapped segments (ids, slugs) come back unchanged.
  pub fn translate_segment<'a>(&'a self, segment: &'a str, target: Locale) -> &'a str {
    match self.by_segment.get(segment) {
      Some(&i) => self.mappings[i].get(target),
      None => segment,
    }
  }

  /// Translate every segment of a locale-free path, keeping empty segments in place.
  pub fn translate_path(&self, path: &str, target: Locale) -> String {
    path.split('/').map(|seg| self.translate_segment(seg, target)).collect::<Vec<_>>().join("/")
  }

  /// Public path (possibly `/en`-prefixed) rewritten for `target`, without slug knowledge.
  pub fn switch_locale_path(&self, public_path: &str, target: Locale) -> String {
    let (_, rest) = split_locale_prefix(public_path);
    localize_path(&self.translate_path(rest, target), target)
  }

  /// Locale-free path of a static route, e.g. `/universitet/tarix`.
  pub fn route_path(&self, route: &StaticRoute, locale: Locale) -> String {
    let mut path = String::new();
    for key in &route.segments {
      path.push('/');
      path.push_str(self.segment(key, locale));
    }
    if path.is_empty() { "/".to_string() } else { path }
  }

  /// Public (prefixed) path of a static route.
  pub fn public_route_path(&self, route: &StaticRoute, locale: Locale) -> String {
    localize_path(&self.route_path(route, locale), locale)
  }

  pub fn static_route(&self, key: &str) -> Option<&StaticRoute> {
    self.static_routes.iter().find(|r| r.key == key)
  }

  /// Exact match of a locale-free path against static routes spelled in `locale`.
  pub fn match_static(&self, locale: Locale, path: &str) -> Option<&StaticRoute> {
    self.static_index.get(&(locale, normalize_path(path))).map(|&i| &self.static_routes[i])
  }

  /// Entity collection whose public segment in `locale` is `segment`.
  pub fn entity_kind_for_segment(&self, locale: Locale, segment: &str) -> Option<EntityKind> {
    EntityKind::ALL.into_iter().find(|kind| {
      kind.listing_key().and_then(|key| self.mapping(key)).is_some_and(|m| m.get(locale) == segment)
    })
  }

  /// Locale-free path of an entity detail page: `/{collection}/{slug}`, or `/{slug}` for pages.
  pub fn entity_path(&self, kind: EntityKind, slug: &str, locale: Locale) -> String {
    match kind.listing_key() {
      Some(key) => format!("/{}/{slug}", self.segment(key, locale)),
      None => format!("/{slug}"),
    }
  }
}

impl Default for RoutingTable {
  fn default() -> Self {
    Self::builtin()
  }
}

/// Collapse duplicate and trailing slashes: `//a/b/` -> `/a/b`.
pub fn normalize_path(path: &str) -> String {
  let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
  if segments.is_empty() { "/".to_string() } else { format!("/{}", segments.join("/")) }
}

fn validate(mappings: &[RouteSegmentMapping], routes: &[StaticRoute]) -> Result<(), RoutingError> {
  let mut keys: HashSet<&str> = HashSet::new();
  let mut owners: HashMap<&str, &str> = HashMap::new();

  for m in mappings {
    if !keys.insert(m.key.as_str()) {
      return Err(RoutingError::DuplicateKey(m.key.clone()));
    }
    for seg in [m.az.as_str(), m.en.as_str()] {
      if seg.is_empty() {
        return Err(RoutingError::EmptySegment(m.key.clone()));
      }
      if seg.contains('/') {
        return Err(RoutingError::SlashInSegment(seg.to_string()));
      }
      match owners.get(seg) {
        Some(&owner) if owner != m.key => {
          return Err(RoutingError::ConflictingSegment {
            segment: seg.to_string(),
            first: owner.to_string(),
            second: m.key.clone(),
          });
        }
        _ => {
          owners.insert(seg, m.key.as_str());
        }
      }
    }
  }

  for route in routes {
    for key in &route.segments {
      if !keys.contains(key.as_str()) {
        return Err(RoutingError::UnknownKey { route: route.key.clone(), key: key.clone() });
      }
    }
  }
  Ok(())
}
