/* src/server/core/rust/src/content/memory.rs */

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use super::{BoxFuture, ContentEntity, ContentSource, EntityKind, ListQuery, Paginated, Pagination};
use crate::errors::FetchError;
use crate::locale::Locale;
use crate::menu::MenuTree;

/// In-process content source. Counts every fetch so callers can assert which
/// paths reached the Content API, and can be switched into an outage.
#[derive(Default)]
pub struct MemoryContentSource {
  entities: HashMap<EntityKind, Vec<ContentEntity>>,
  menu: Option<MenuTree>,
  offline: AtomicBool,
  fetches: AtomicUsize,
}

impl MemoryContentSource {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_entity(mut self, kind: EntityKind, entity: ContentEntity) -> Self {
    self.entities.entry(kind).or_default().push(entity);
    self
  }

  pub fn with_menu(mut self, menu: MenuTree) -> Self {
    self.menu = Some(menu);
    self
  }

  /// Every subsequent fetch fails with a transport error.
  pub fn set_offline(&self, offline: bool) {
    self.offline.store(offline, Ordering::SeqCst);
  }

  pub fn fetch_count(&self) -> usize {
    self.fetches.load(Ordering::SeqCst)
  }

  fn begin_fetch(&self) -> Result<(), FetchError> {
    self.fetches.fetch_add(1, Ordering::SeqCst);
    if self.offline.load(Ordering::SeqCst) {
      return Err(FetchError::Transport("content source is offline".to_string()));
    }
    Ok(())
  }
}

impl ContentSource for MemoryContentSource {
  fn fetch_by_slug<'a>(
    &'a self,
    kind: EntityKind,
    slug: &'a str,
    locale: Locale,
  ) -> BoxFuture<'a, Result<Option<ContentEntity>, FetchError>> {
    Box::pin(async move {
      self.begin_fetch()?;
      let found = self
        .entities
        .get(&kind)
        .and_then(|list| list.iter().find(|e| e.slug.get_strict(locale) == Some(slug)))
        .cloned();
      Ok(found)
    })
  }

  fn fetch_list<'a>(
    &'a self,
    kind: EntityKind,
    query: &'a ListQuery,
  ) -> BoxFuture<'a, Result<Paginated<ContentEntity>, FetchError>> {
    Box::pin(async move {
      self.begin_fetch()?;
      let search = query.search.as_deref().map(str::to_lowercase);
      let matching: Vec<&ContentEntity> = self
        .entities
        .get(&kind)
        .map(|list| {
          list
            .iter()
            .filter(|e| match query.category.as_deref() {
              Some(c) if !c.is_empty() => e.category.as_deref() == Some(c),
              _ => true,
            })
            .filter(|e| match search.as_deref() {
              Some(s) if !s.is_empty() => e.title.get(query.locale).to_lowercase().contains(s),
              _ => true,
            })
            .collect()
        })
        .unwrap_or_default();

      let limit = query.limit.clamp(1, ListQuery::MAX_LIMIT);
      let page = query.page.max(1);
      let total = matching.len();
      let start = (u64::from(page) - 1) * u64::from(limit);
      let start = usize::try_from(start).unwrap_or(usize::MAX);
      let data = matching.into_iter().skip(start).take(limit as usize).cloned().collect();
      Ok(Paginated {
        data,
        pagination: Pagination {
          page,
          limit,
          total: total as u64,
          total_pages: total.div_ceil(limit as usize) as u32,
        },
      })
    })
  }

  fn fetch_menu(&self) -> BoxFuture<'_, Result<MenuTree, FetchError>> {
    Box::pin(async move {
      self.begin_fetch()?;
      self
        .menu
        .clone()
        .ok_or(FetchError::Status { status: 404, url: "/misc/menu".to_string() })
    })
  }
}
