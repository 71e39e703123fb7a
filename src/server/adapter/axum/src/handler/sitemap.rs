/* src/server/adapter/axum/src/handler/sitemap.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use chrono::Utc;
use unisite_core::{build_sitemap, render_robots, render_sitemap_xml};

use super::AppState;

pub(super) async fn handle_sitemap(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let entries = build_sitemap(&state.resolver, &state.base_url, &state.sitemap_pages, Utc::now()).await;
  tracing::debug!(entries = entries.len(), "sitemap generated");
  ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], render_sitemap_xml(&entries))
}

pub(super) async fn handle_robots(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], render_robots(&state.base_url))
}
