/* src/server/core/rust/src/sitemap.rs */

use std::collections::{BTreeMap, HashSet};
use std::fmt::Write as _;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::content::{ContentEntity, EntityKind};
use crate::escape::{encode_path, escape_xml};
use crate::locale::{Locale, localize_path};
use crate::menu::MenuTree;
use crate::resolver::ContentResolver;
use crate::routing::{ChangeFrequency, RoutingTable};

/// Public paths of one logical page. Either side may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalizedPair {
  pub az: Option<String>,
  pub en: Option<String>,
}

impl LocalizedPair {
  pub fn get(&self, locale: Locale) -> Option<&str> {
    match locale {
      Locale::Az => self.az.as_deref(),
      Locale::En => self.en.as_deref(),
    }
  }

  /// Default-locale path if present, otherwise the first locale that has one.
  pub fn primary(&self) -> Option<&str> {
    Locale::ALL.into_iter().find_map(|l| self.get(l))
  }
}

/// Walk every menu node depth-first and collect its localized paths, first occurrence wins.
///
/// Nodes without an href (section headers, page references, external links) add nothing.
pub fn collect_localized_pairs(menu: &MenuTree, table: &RoutingTable) -> Vec<LocalizedPair> {
  let mut seen = HashSet::new();
  menu
    .walk()
    .filter_map(|node| node.href()?.localized_pair(table))
    .filter(|pair| seen.insert(pair.clone()))
    .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Alternates {
  pub languages: BTreeMap<Locale, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
  pub url: String,
  pub alternates: Alternates,
  pub last_modified: Option<DateTime<Utc>>,
  pub change_frequency: ChangeFrequency,
  pub priority: f32,
}

/// A hand-authored page listed in the sitemap but unknown to the routing table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraPage {
  #[serde(default)]
  pub az: Option<String>,
  #[serde(default)]
  pub en: Option<String>,
  #[serde(default = "default_extra_frequency")]
  pub change_frequency: ChangeFrequency,
  #[serde(default = "default_extra_priority")]
  pub priority: f32,
}

fn default_extra_frequency() -> ChangeFrequency {
  ChangeFrequency::Monthly
}

fn default_extra_priority() -> f32 {
  0.5
}

/// Accumulates sitemap entries, de-duplicated by their `(az, en)` path pair.
pub struct SitemapBuilder<'t> {
  base_url: String,
  table: &'t RoutingTable,
  generated_at: DateTime<Utc>,
  seen: HashSet<LocalizedPair>,
  entries: Vec<SitemapEntry>,
}

impl<'t> SitemapBuilder<'t> {
  pub fn new(base_url: &str, table: &'t RoutingTable, generated_at: DateTime<Utc>) -> Self {
    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      table,
      generated_at,
      seen: HashSet::new(),
      entries: Vec::new(),
    }
  }

  fn absolute(&self, path: &str) -> String {
    let path = encode_path(path);
    if path.starts_with('/') { format!("{}{path}", self.base_url) } else { format!("{}/{path}", self.base_url) }
  }

  /// Add one entry; returns false when the pair is empty or already present.
  pub fn push(
    &mut self,
    pair: LocalizedPair,
    last_modified: Option<DateTime<Utc>>,
    change_frequency: ChangeFrequency,
    priority: f32,
  ) -> bool {
    let Some(primary) = pair.primary() else {
      return false;
    };
    if self.seen.contains(&pair) {
      return false;
    }
    let url = self.absolute(primary);
    let languages = Locale::ALL
      .into_iter()
      .filter_map(|l| pair.get(l).map(|p| (l, self.absolute(p))))
      .collect();
    self.entries.push(SitemapEntry {
      url,
      alternates: Alternates { languages },
      last_modified,
      change_frequency,
      priority: priority.clamp(0.0, 1.0),
    });
    self.seen.insert(pair);
    true
  }

  pub fn add_static_routes(&mut self) -> &mut Self {
    let table = self.table;
    for route in table.static_routes() {
      let pair = LocalizedPair {
        az: Some(table.public_route_path(route, Locale::Az)),
        en: Some(table.public_route_path(route, Locale::En)),
      };
      self.push(pair, Some(self.generated_at), route.change_frequency, route.priority);
    }
    self
  }

  pub fn add_menu(&mut self, menu: &MenuTree) -> &mut Self {
    for pair in collect_localized_pairs(menu, self.table) {
      self.push(pair, Some(self.generated_at), ChangeFrequency::Monthly, 0.5);
    }
    self
  }

  pub fn add_extra_pages(&mut self, pages: &[ExtraPage]) -> &mut Self {
    for page in pages {
      let pair = LocalizedPair { az: page.az.clone(), en: page.en.clone() };
      self.push(pair, Some(self.generated_at), page.change_frequency, page.priority);
    }
    self
  }

  /// Detail pages for entities. A locale without its own slug gets no alternate.
  pub fn add_entities(&mut self, kind: EntityKind, entities: &[ContentEntity]) -> &mut Self {
    let (frequency, priority) = match kind {
      EntityKind::News | EntityKind::Event | EntityKind::Blog => (ChangeFrequency::Weekly, 0.6),
      EntityKind::Page | EntityKind::Faculty | EntityKind::Person => (ChangeFrequency::Monthly, 0.5),
    };
    let table = self.table;
    for entity in entities.iter().filter(|e| e.is_visible()) {
      let path = |l: Locale| {
        entity.slug.get_strict(l).map(|slug| localize_path(&table.entity_path(kind, slug, l), l))
      };
      let pair = LocalizedPair { az: path(Locale::Az), en: path(Locale::En) };
      self.push(pair, entity.last_modified(), frequency, priority);
    }
    self
  }

  pub fn finish(self) -> Vec<SitemapEntry> {
    self.entries
  }
}

/// Full sitemap: static routes, menu links, configured extras, then published entities.
pub async fn build_sitemap(
  resolver: &ContentResolver,
  base_url: &str,
  extra_pages: &[ExtraPage],
  generated_at: DateTime<Utc>,
) -> Vec<SitemapEntry> {
  let menu = resolver.menu().await;
  let mut entities = Vec::new();
  for kind in EntityKind::ALL {
    entities.push((kind, resolver.all_visible(kind).await));
  }

  let mut builder = SitemapBuilder::new(base_url, resolver.table(), generated_at);
  builder.add_static_routes().add_menu(&menu).add_extra_pages(extra_pages);
  for (kind, list) in &entities {
    builder.add_entities(*kind, list);
  }
  builder.finish()
}

pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
  let mut xml = String::from(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
  );
  for entry in entries {
    xml.push_str("  <url>\n");
    let _ = writeln!(xml, "    <loc>{}</loc>", escape_xml(&entry.url));
    for (locale, href) in &entry.alternates.languages {
      let _ = writeln!(
        xml,
        "    <xhtml:link rel=\"alternate\" hreflang=\"{locale}\" href=\"{}\"/>",
        escape_xml(href)
      );
    }
    if let Some(modified) = entry.last_modified {
      let _ = writeln!(
        xml,
        "    <lastmod>{}</lastmod>",
        modified.to_rfc3339_opts(SecondsFormat::Secs, true)
      );
    }
    let _ = writeln!(xml, "    <changefreq>{}</changefreq>", entry.change_frequency.as_str());
    let _ = writeln!(xml, "    <priority>{:.1}</priority>", entry.priority);
    xml.push_str("  </url>\n");
  }
  xml.push_str("</urlset>\n");
  xml
}

pub fn render_robots(base_url: &str) -> String {
  let base = base_url.trim_end_matches('/');
  format!(
    "User-agent: *\nAllow: /\nDisallow: /api/\nDisallow: /admin/\nDisallow: /_site/\n\nSitemap: {base}/sitemap.xml\n"
  )
}
