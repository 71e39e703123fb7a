/* src/server/adapter/axum/src/handler/menu.rs */

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use unisite_core::{Locale, NavItem, project_navigation};

use super::{AppState, parse_locale};
use crate::error::AxumError;

#[derive(Deserialize)]
pub(super) struct MenuParams {
  locale: Option<String>,
}

#[derive(Serialize)]
pub(super) struct MenuResponse {
  locale: Locale,
  items: Vec<NavItem>,
}

pub(super) async fn handle_menu(
  State(state): State<Arc<AppState>>,
  Query(params): Query<MenuParams>,
) -> Result<Json<MenuResponse>, AxumError> {
  let locale = parse_locale(params.locale.as_deref())?;
  let menu = state.resolver.menu().await;
  let items = project_navigation(&menu, locale, state.resolver.table());
  Ok(Json(MenuResponse { locale, items }))
}
