/* src/server/core/rust/src/content/mod.rs */

mod memory;

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::FetchError;
use crate::locale::Locale;
use crate::localized::LocalizedString;
use crate::menu::MenuTree;

pub use memory::MemoryContentSource;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Content types served by the Content API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
  News,
  Blog,
  Event,
  Page,
  Person,
  Faculty,
}

impl EntityKind {
  pub const ALL: [EntityKind; 6] = [
    EntityKind::News,
    EntityKind::Blog,
    EntityKind::Event,
    EntityKind::Page,
    EntityKind::Person,
    EntityKind::Faculty,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::News => "news",
      Self::Blog => "blog",
      Self::Event => "event",
      Self::Page => "page",
      Self::Person => "person",
      Self::Faculty => "faculty",
    }
  }

  /// Collection path on the Content API, e.g. `GET /blogs/{slug}`.
  pub fn api_path(self) -> &'static str {
    match self {
      Self::News => "news",
      Self::Blog => "blogs",
      Self::Event => "events",
      Self::Page => "pages",
      Self::Person => "persons",
      Self::Faculty => "faculties",
    }
  }

  /// Routing-table key of the public collection segment. Pages live at `/{slug}`.
  pub fn listing_key(self) -> Option<&'static str> {
    match self {
      Self::News => Some("news"),
      Self::Blog => Some("blogs"),
      Self::Event => Some("events"),
      Self::Person => Some("persons"),
      Self::Faculty => Some("faculties"),
      Self::Page => None,
    }
  }
}

impl fmt::Display for EntityKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for EntityKind {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|k| k.as_str() == s || k.api_path() == s)
      .ok_or_else(|| format!("unknown entity kind \"{s}\""))
  }
}

/// A content record as returned by the Content API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntity {
  #[serde(deserialize_with = "id_as_string")]
  pub id: String,
  pub slug: LocalizedString,
  #[serde(default)]
  pub title: LocalizedString,
  #[serde(default)]
  pub excerpt: LocalizedString,
  #[serde(default)]
  pub body: LocalizedString,
  /// Persons and faculties carry no publish flag; absent means published.
  #[serde(default = "default_true")]
  pub is_published: bool,
  #[serde(default)]
  pub is_deleted: bool,
  #[serde(default)]
  pub published_at: Option<DateTime<Utc>>,
  #[serde(default)]
  pub updated_at: Option<DateTime<Utc>>,
  #[serde(default)]
  pub category: Option<String>,
  #[serde(default)]
  pub tags: Vec<String>,
}

impl ContentEntity {
  pub fn new(id: impl Into<String>, slug: LocalizedString) -> Self {
    Self {
      id: id.into(),
      slug,
      title: LocalizedString::default(),
      excerpt: LocalizedString::default(),
      body: LocalizedString::default(),
      is_published: true,
      is_deleted: false,
      published_at: None,
      updated_at: None,
      category: None,
      tags: Vec::new(),
    }
  }

  /// Published and not soft-deleted.
  pub fn is_visible(&self) -> bool {
    self.is_published && !self.is_deleted
  }

  pub fn last_modified(&self) -> Option<DateTime<Utc>> {
    self.updated_at.or(self.published_at)
  }
}

fn default_true() -> bool {
  true
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum RawId {
    Text(String),
    Number(i64),
  }
  Ok(match RawId::deserialize(deserializer)? {
    RawId::Text(s) => s,
    RawId::Number(n) => n.to_string(),
  })
}

/// Listing query, mirrors `GET /{kind}?locale=&page=&limit=&category=&search=`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListQuery {
  pub locale: Locale,
  pub page: u32,
  pub limit: u32,
  #[serde(default)]
  pub category: Option<String>,
  #[serde(default)]
  pub search: Option<String>,
}

impl ListQuery {
  pub const DEFAULT_LIMIT: u32 = 12;
  pub const MAX_LIMIT: u32 = 100;

  pub fn new(locale: Locale) -> Self {
    Self { locale, page: 1, limit: Self::DEFAULT_LIMIT, category: None, search: None }
  }

  /// Query-string pairs in Content API order. Empty filters are omitted.
  pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
      ("locale", self.locale.as_str().to_string()),
      ("page", self.page.max(1).to_string()),
      ("limit", self.limit.clamp(1, Self::MAX_LIMIT).to_string()),
    ];
    if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
      pairs.push(("category", category.to_string()));
    }
    if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
      pairs.push(("search", search.to_string()));
    }
    pairs
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
  #[serde(default)]
  pub page: u32,
  #[serde(default)]
  pub limit: u32,
  #[serde(default)]
  pub total: u64,
  #[serde(default)]
  pub total_pages: u32,
}

/// `{ data, pagination }` list envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
  pub data: Vec<T>,
  #[serde(default)]
  pub pagination: Pagination,
}

impl<T> Paginated<T> {
  pub fn empty(query: &ListQuery) -> Self {
    Self {
      data: Vec::new(),
      pagination: Pagination { page: query.page, limit: query.limit, total: 0, total_pages: 0 },
    }
  }
}

/// Read access to the Content API. Implemented over HTTP by `unisite-content`
/// and in memory by [`MemoryContentSource`].
pub trait ContentSource: Send + Sync {
  /// `GET /{kind}/{slug}?locale=`. `Ok(None)` on a 404.
  fn fetch_by_slug<'a>(
    &'a self,
    kind: EntityKind,
    slug: &'a str,
    locale: Locale,
  ) -> BoxFuture<'a, Result<Option<ContentEntity>, FetchError>>;

  fn fetch_list<'a>(
    &'a self,
    kind: EntityKind,
    query: &'a ListQuery,
  ) -> BoxFuture<'a, Result<Paginated<ContentEntity>, FetchError>>;

  /// `GET /misc/menu`, normalized into a [`MenuTree`].
  fn fetch_menu(&self) -> BoxFuture<'_, Result<MenuTree, FetchError>>;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_api_entity() {
    let json = serde_json::json!({
      "id": 42,
      "slug": { "az": "qebul-2025", "en": "admission-2025" },
      "title": { "az": "Qəbul 2025", "en": "" },
      "isPublished": true,
      "isDeleted": false,
      "publishedAt": "2025-06-01T09:00:00Z",
      "category": "announcement",
      "tags": ["qebul"]
    });
    let entity: ContentEntity = serde_json::from_value(json).unwrap();
    assert_eq!(entity.id, "42");
    assert_eq!(entity.slug.en, "admission-2025");
    assert_eq!(entity.title.get(Locale::En), "Qəbul 2025");
    assert!(entity.is_visible());
    assert_eq!(entity.last_modified(), entity.published_at);
  }

  #[test]
  fn missing_publish_flag_means_published() {
    let json = serde_json::json!({ "id": "p1", "slug": { "az": "eli-eliyev" } });
    let entity: ContentEntity = serde_json::from_value(json).unwrap();
    assert!(entity.is_published);
    assert!(entity.is_visible());
  }

  #[test]
  fn soft_deleted_is_not_visible() {
    let mut entity = ContentEntity::new("1", LocalizedString::new("a", "a"));
    entity.is_deleted = true;
    assert!(!entity.is_visible());
  }

  #[test]
  fn list_query_pairs() {
    let mut q = ListQuery::new(Locale::En);
    q.limit = 500;
    q.category = Some(String::new());
    q.search = Some("library".into());
    assert_eq!(
      q.to_pairs(),
      vec![
        ("locale", "en".to_string()),
        ("page", "1".to_string()),
        ("limit", "100".to_string()),
        ("search", "library".to_string()),
      ]
    );
  }

  #[test]
  fn entity_kind_parse() {
    assert_eq!("blogs".parse::<EntityKind>(), Ok(EntityKind::Blog));
    assert_eq!("faculty".parse::<EntityKind>(), Ok(EntityKind::Faculty));
    assert!("menus".parse::<EntityKind>().is_err());
  }
}
