/* src/server/adapter/axum/src/handler/switch.rs */

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use unisite_core::{AlternateSlugContext, Locale, SiteError, split_locale_prefix};

use super::AppState;
use crate::error::AxumError;

#[derive(Deserialize)]
pub(super) struct SwitchParams {
  path: String,
  to: Option<String>,
}

#[derive(Serialize)]
pub(super) struct SwitchResponse {
  from: Locale,
  to: Locale,
  href: String,
}

/// Target of the language switcher for `path`. Entity detail pages are resolved first so the
/// link lands on the same entity's slug in the target locale.
pub(super) async fn handle_switch(
  State(state): State<Arc<AppState>>,
  Query(params): Query<SwitchParams>,
) -> Result<Json<SwitchResponse>, AxumError> {
  if !params.path.starts_with('/') {
    return Err(SiteError::validation("path must start with '/'").into());
  }
  let (from, rest) = split_locale_prefix(&params.path);
  let to = match params.to.as_deref() {
    Some(raw) => super::parse_locale(Some(raw))?,
    None => from.other(),
  };

  let mut ctx = AlternateSlugContext::new();
  state.resolver.resolve_path(from, rest, &mut ctx).await;
  let href = ctx.switch_href(&params.path, to, state.resolver.table());
  Ok(Json(SwitchResponse { from, to, href }))
}
