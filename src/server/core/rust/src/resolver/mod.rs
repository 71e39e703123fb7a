/* src/server/core/rust/src/resolver/mod.rs */

// Turns a (locale, path) pair into a static route, a content entity, a redirect, or nothing.
// Content API failures end here: they are logged and read as "no data".

mod cache;


use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::content::{ContentEntity, ContentSource, EntityKind, ListQuery, Paginated};
use crate::context::AlternateSlugContext;
use crate::errors::FetchError;
use crate::locale::Locale;
use crate::menu::MenuTree;
use crate::routing::{RoutingTable, StaticRoute, normalize_path};

use cache::TtlCache;

pub const DEFAULT_REVALIDATE: Duration = Duration::from_secs(300);
const CACHE_CAPACITY: usize = 4096;

/// Outcome of a slug lookup. A missing page is not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
  Found(Arc<ContentEntity>),
  NotFound,
}

impl Resolution {
  pub fn entity(&self) -> Option<&ContentEntity> {
    match self {
      Resolution::Found(e) => Some(e),
      Resolution::NotFound => None,
    }
  }

  pub fn is_found(&self) -> bool {
    matches!(self, Resolution::Found(_))
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageMatch {
  Static(StaticRoute),
  Entity { kind: EntityKind, entity: Arc<ContentEntity> },
  /// Canonical public path for a request spelled with the other locale's segments.
  Redirect(String),
  NotFound,
}

/// The same entity's slug in the other locale, falling back to the default-locale slug.
pub fn resolve_alternate_slug(entity: &ContentEntity, current: Locale) -> Option<String> {
  entity
    .slug
    .get_strict(current.other())
    .or_else(|| entity.slug.get_strict(Locale::DEFAULT))
    .map(String::from)
}

type EntityKey = (EntityKind, Locale, String);
type ListKey = (EntityKind, ListQuery);

pub struct ContentResolver {
  source: Arc<dyn ContentSource>,
  table: Arc<RoutingTable>,
  revalidate: Duration,
  entities: TtlCache<EntityKey, Option<Arc<ContentEntity>>>,
  lists: TtlCache<ListKey, Arc<Paginated<ContentEntity>>>,
  menu: TtlCache<(), Arc<MenuTree>>,
}

impl ContentResolver {
  pub fn new(source: Arc<dyn ContentSource>, table: Arc<RoutingTable>) -> Self {
    Self::with_revalidate(source, table, DEFAULT_REVALIDATE)
  }

  /// `revalidate` bounds how stale a cached lookup may be; zero disables caching.
  pub fn with_revalidate(
    source: Arc<dyn ContentSource>,
    table: Arc<RoutingTable>,
    revalidate: Duration,
  ) -> Self {
    Self {
      source,
      table,
      revalidate,
      entities: TtlCache::new(revalidate, CACHE_CAPACITY),
      lists: TtlCache::new(revalidate, CACHE_CAPACITY),
      menu: TtlCache::new(revalidate, 1),
    }
  }

  pub fn table(&self) -> &RoutingTable {
    &self.table
  }

  pub fn revalidate(&self) -> Duration {
    self.revalidate
  }

  /// Drop every cached lookup.
  pub fn invalidate(&self) {
    self.entities.clear();
    self.lists.clear();
    self.menu.clear();
  }

  /// Look up a published, non-deleted entity whose `slug[locale]` equals `slug`.
  pub async fn resolve_by_slug(&self, kind: EntityKind, slug: &str, locale: Locale) -> Resolution {
    if slug.is_empty() {
      return Resolution::NotFound;
    }
    let key = (kind, locale, slug.to_string());
    if let Some(cached) = self.entities.get(&key) {
      debug!(%kind, %locale, slug, hit = cached.is_some(), "entity cache hit");
      return cached.map_or(Resolution::NotFound, Resolution::Found);
    }

    let visible = match self.source.fetch_by_slug(kind, slug, locale).await {
      Ok(found) => found.filter(ContentEntity::is_visible).map(Arc::new),
      Err(e) => {
        warn!(%kind, %locale, slug, error = %e, "entity fetch failed, treating as not found");
        return Resolution::NotFound;
      }
    };
    self.entities.insert(key, visible.clone());
    visible.map_or(Resolution::NotFound, Resolution::Found)
  }

  /// Resolve a locale-free path for `locale`, recording alternate slugs in `ctx`.
  ///
  /// Static routes answer first and never touch the Content API. `/{collection}/{slug}` and
  /// `/{slug}` (pages) go to the Content API. A miss is retried against the static table
  /// with the path translated into `locale`.
  pub async fn resolve_path(
    &self,
    locale: Locale,
    path: &str,
    ctx: &mut AlternateSlugContext,
  ) -> PageMatch {
    let path = normalize_path(path);

    if let Some(route) = self.table.match_static(locale, &path) {
      debug!(%locale, %path, route = %route.key, "static route");
      ctx.clear();
      return PageMatch::Static(route.clone());
    }

    if let Some((kind, slug)) = self.entity_candidate(locale, &path) {
      if let Some(entity) = self.resolve_entity(kind, slug, locale).await {
        let alternate = resolve_alternate_slug(&entity, locale);
        ctx.set_entity(kind, (locale, slug), alternate.as_deref());
        return PageMatch::Entity { kind, entity };
      }
    }

    ctx.clear();
    let translated = self.table.translate_path(&path, locale);
    if translated != path {
      if let Some(route) = self.table.match_static(locale, &translated) {
        let location = self.table.public_route_path(route, locale);
        debug!(%locale, %path, %location, "other-locale spelling, redirecting");
        return PageMatch::Redirect(location);
      }
    }
    PageMatch::NotFound
  }

  fn entity_candidate<'p>(&self, locale: Locale, path: &'p str) -> Option<(EntityKind, &'p str)> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
      [collection, slug] => {
        self.table.entity_kind_for_segment(locale, collection).map(|kind| (kind, *slug))
      }
      [slug] => Some((EntityKind::Page, *slug)),
      _ => None,
    }
  }

  /// Slug lookup in `locale`; an entity with no slug of its own in a secondary locale is
  /// reachable there under its default-locale slug, so alternate links never dead-end.
  async fn resolve_entity(
    &self,
    kind: EntityKind,
    slug: &str,
    locale: Locale,
  ) -> Option<Arc<ContentEntity>> {
    if let Resolution::Found(entity) = self.resolve_by_slug(kind, slug, locale).await {
      return Some(entity);
    }
    if locale.is_default() {
      return None;
    }
    match self.resolve_by_slug(kind, slug, Locale::DEFAULT).await {
      Resolution::Found(entity) if entity.slug.get_strict(locale).is_none() => Some(entity),
      _ => None,
    }
  }

  /// One page of a collection, published entries only. Fetch failures read as an empty page.
  pub async fn list(&self, kind: EntityKind, query: &ListQuery) -> Arc<Paginated<ContentEntity>> {
    let key = (kind, query.clone());
    if let Some(cached) = self.lists.get(&key) {
      return cached;
    }
    match self.source.fetch_list(kind, query).await {
      Ok(mut page) => {
        page.data.retain(ContentEntity::is_visible);
        let page = Arc::new(page);
        self.lists.insert(key, page.clone());
        page
      }
      Err(e) => {
        warn!(%kind, locale = %query.locale, error = %e, "list fetch failed, serving empty page");
        Arc::new(Paginated::empty(query))
      }
    }
  }

  /// The menu straight from the Content API, cached; no fallback applied.
  pub async fn load_menu(&self) -> Result<Arc<MenuTree>, FetchError> {
    if let Some(cached) = self.menu.get(&()) {
      return Ok(cached);
    }
    let tree = Arc::new(self.source.fetch_menu().await?);
    self.menu.insert((), tree.clone());
    Ok(tree)
  }

  /// The menu, or the bundled static menu when the Content API cannot provide one.
  pub async fn menu(&self) -> Arc<MenuTree> {
    match self.load_menu().await {
      Ok(tree) => tree,
      Err(e) => {
        warn!(error = %e, "menu fetch failed, using bundled fallback menu");
        Arc::new(MenuTree::fallback())
      }
    }
  }

  /// Every published entity of `kind`, page by page, for the sitemap.
  pub async fn all_visible(&self, kind: EntityKind) -> Vec<ContentEntity> {
    let mut out = Vec::new();
    let mut query = ListQuery::new(Locale::DEFAULT);
    query.limit = ListQuery::MAX_LIMIT;
    loop {
      let page = match self.source.fetch_list(kind, &query).await {
        Ok(page) => page,
        Err(e) => {
          warn!(%kind, page = query.page, error = %e, "list fetch failed, sitemap walk stops");
          break;
        }
      };
      // decide on the raw page; a page of drafts is not the end of the collection
      let last = page.data.is_empty() || query.page >= page.pagination.total_pages;
      out.extend(page.data.into_iter().filter(ContentEntity::is_visible));
      if last {
        break;
      }
      query.page += 1;
    }
    out
  }
}
