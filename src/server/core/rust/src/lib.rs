/* src/server/core/rust/src/lib.rs */

pub mod content;
pub mod context;
pub mod errors;
pub mod escape;
pub mod locale;
pub mod localized;
pub mod menu;
pub mod resolver;
pub mod routing;
pub mod site;
pub mod sitemap;

// Re-exports for ergonomic use
pub use content::{
  BoxFuture, ContentEntity, ContentSource, EntityKind, ListQuery, MemoryContentSource, Paginated,
  Pagination,
};
pub use context::AlternateSlugContext;
pub use errors::{FetchError, RoutingError, SiteError};
pub use escape::{encode_path, escape_xml};
pub use locale::{Locale, UnknownLocale, localize_path, split_locale_prefix};
pub use localized::LocalizedString;
pub use menu::{Href, MenuLink, MenuNode, MenuTree, NavItem, PageRef, project_navigation};
pub use resolver::{ContentResolver, PageMatch, Resolution, resolve_alternate_slug};
pub use routing::{ChangeFrequency, RouteSegmentMapping, RoutingTable, StaticRoute};
pub use site::{Site, SiteParts};
pub use sitemap::{
  ExtraPage, LocalizedPair, SitemapBuilder, SitemapEntry, build_sitemap, collect_localized_pairs,
  render_robots, render_sitemap_xml,
};
