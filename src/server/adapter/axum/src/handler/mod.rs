/* src/server/adapter/axum/src/handler/mod.rs */

mod menu;
mod page;
mod sitemap;
mod switch;


use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use unisite_core::{ContentResolver, ExtraPage, Locale, SiteError};

use crate::PAGE_PREFIX;

pub(crate) struct AppState {
  pub resolver: Arc<ContentResolver>,
  pub base_url: String,
  pub sitemap_pages: Vec<ExtraPage>,
}

pub(crate) fn build_router(
  resolver: Arc<ContentResolver>,
  base_url: String,
  sitemap_pages: Vec<ExtraPage>,
) -> Router {
  let state = Arc::new(AppState { resolver, base_url, sitemap_pages });

  // A `{*path}` wildcard never matches the empty remainder, so the home page
  // gets its own route.
  Router::new()
    .route("/sitemap.xml", get(sitemap::handle_sitemap))
    .route("/robots.txt", get(sitemap::handle_robots))
    .route("/_site/menu", get(menu::handle_menu))
    .route("/_site/switch", get(switch::handle_switch))
    .route(PAGE_PREFIX, get(page::handle_home))
    .route(&format!("{PAGE_PREFIX}/{{*path}}"), get(page::handle_page))
    .with_state(state)
}

/// Parse an optional `locale` query value; absent means the default locale.
pub(super) fn parse_locale(raw: Option<&str>) -> Result<Locale, SiteError> {
  match raw {
    None | Some("") => Ok(Locale::DEFAULT),
    Some(s) => s.parse::<Locale>().map_err(|e| SiteError::validation(e.to_string())),
  }
}
