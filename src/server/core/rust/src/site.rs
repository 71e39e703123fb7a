/* src/server/core/rust/src/site.rs */

use std::sync::Arc;
use std::time::Duration;

use crate::content::ContentSource;
use crate::resolver::{ContentResolver, DEFAULT_REVALIDATE};
use crate::routing::RoutingTable;
use crate::sitemap::ExtraPage;

/// Framework-agnostic parts extracted from `Site`.
/// Adapter crates consume this to build framework-specific routers.
pub struct SiteParts {
  pub resolver: Arc<ContentResolver>,
  pub base_url: String,
  pub sitemap_pages: Vec<ExtraPage>,
}

impl SiteParts {
  pub fn table(&self) -> &RoutingTable {
    self.resolver.table()
  }
}

pub struct Site {
  source: Arc<dyn ContentSource>,
  table: RoutingTable,
  base_url: String,
  revalidate: Duration,
  sitemap_pages: Vec<ExtraPage>,
}

impl Site {
  pub fn new(source: Arc<dyn ContentSource>) -> Self {
    Self {
      source,
      table: RoutingTable::builtin(),
      base_url: "http://localhost:3000".to_string(),
      revalidate: DEFAULT_REVALIDATE,
      sitemap_pages: Vec::new(),
    }
  }

  pub fn routing_table(mut self, table: RoutingTable) -> Self {
    self.table = table;
    self
  }

  /// Absolute origin used for sitemap and robots URLs.
  pub fn base_url(mut self, url: impl Into<String>) -> Self {
    self.base_url = url.into().trim_end_matches('/').to_string();
    self
  }

  pub fn revalidate(mut self, revalidate: Duration) -> Self {
    self.revalidate = revalidate;
    self
  }

  pub fn sitemap_page(mut self, page: ExtraPage) -> Self {
    self.sitemap_pages.push(page);
    self
  }

  pub fn sitemap_pages(mut self, pages: impl IntoIterator<Item = ExtraPage>) -> Self {
    self.sitemap_pages.extend(pages);
    self
  }

  /// Consume the builder, returning framework-agnostic parts for an adapter.
  pub fn into_parts(self) -> SiteParts {
    let resolver = ContentResolver::with_revalidate(self.source, Arc::new(self.table), self.revalidate);
    SiteParts {
      resolver: Arc::new(resolver),
      base_url: self.base_url,
      sitemap_pages: self.sitemap_pages,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::content::MemoryContentSource;
  use crate::routing::RouteSegmentMapping;

  #[test]
  fn defaults() {
    let parts = Site::new(Arc::new(MemoryContentSource::new())).into_parts();
    assert_eq!(parts.base_url, "http://localhost:3000");
    assert_eq!(parts.resolver.revalidate(), DEFAULT_REVALIDATE);
    assert!(parts.sitemap_pages.is_empty());
  }

  #[test]
  fn builder_carries_settings() {
    let table = RoutingTable::builtin()
      .with_mappings(vec![RouteSegmentMapping::new("alumni", "mezunlar", "alumni")])
      .unwrap();
    let parts = Site::new(Arc::new(MemoryContentSource::new()))
      .base_url("https://bdu.az/")
      .revalidate(Duration::from_secs(5))
      .routing_table(table)
      .into_parts();
    assert_eq!(parts.base_url, "https://bdu.az");
    assert_eq!(parts.resolver.revalidate(), Duration::from_secs(5));
    assert_eq!(parts.table().translate_segment("mezunlar", crate::locale::Locale::En), "alumni");
  }
}
