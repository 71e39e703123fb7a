/* src/server/adapter/axum/src/handler/page.rs */

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};
use unisite_core::{
  AlternateSlugContext, ContentEntity, EntityKind, ListQuery, Locale, NavItem, PageMatch, Paginated,
  RoutingTable, StaticRoute, encode_path, localize_path, project_navigation, split_locale_prefix,
};

use super::AppState;

#[derive(Debug, Default, Deserialize)]
pub(super) struct PageParams {
  page: Option<u32>,
  limit: Option<u32>,
  category: Option<String>,
  search: Option<String>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum MatchData<'a> {
  Static {
    route: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    listing: Option<Listing<'a>>,
  },
  Entity {
    kind: EntityKind,
    entity: &'a ContentEntity,
  },
}

#[derive(Serialize)]
struct Listing<'a> {
  kind: EntityKind,
  #[serde(flatten)]
  page: &'a Paginated<ContentEntity>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageData<'a> {
  locale: Locale,
  path: &'a str,
  #[serde(rename = "match")]
  matched: MatchData<'a>,
  alternates: BTreeMap<Locale, String>,
  alternate_slugs: &'a AlternateSlugContext,
  navigation: Vec<NavItem>,
}

#[derive(Serialize)]
struct HomeLink {
  href: String,
  label: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NotFoundData<'a> {
  locale: Locale,
  path: &'a str,
  title: &'static str,
  message: &'static str,
  home: HomeLink,
  alternates: BTreeMap<Locale, String>,
  navigation: Vec<NavItem>,
}

fn not_found_text(locale: Locale) -> (&'static str, &'static str, &'static str) {
  match locale {
    Locale::Az => ("Səhifə tapılmadı", "Axtardığınız səhifə mövcud deyil və ya köçürülüb.", "Ana səhifə"),
    Locale::En => ("Page not found", "The page you are looking for does not exist or has been moved.", "Home"),
  }
}

fn listing_query(locale: Locale, route: &StaticRoute, params: &PageParams) -> ListQuery {
  let mut query = ListQuery::new(locale);
  if let Some(page) = params.page {
    query.page = page.max(1);
  }
  if let Some(limit) = params.limit {
    query.limit = limit.clamp(1, ListQuery::MAX_LIMIT);
  }
  query.category = route.category.clone().or_else(|| params.category.clone());
  query.search = params.search.clone().filter(|s| !s.is_empty());
  query
}

fn alternates(
  public_path: &str,
  ctx: &AlternateSlugContext,
  table: &RoutingTable,
) -> BTreeMap<Locale, String> {
  Locale::ALL.into_iter().map(|l| (l, ctx.switch_href(public_path, l, table))).collect()
}

pub(super) async fn handle_home(
  State(state): State<Arc<AppState>>,
  Query(params): Query<PageParams>,
) -> Response {
  render(&state, "/", &params).await
}

pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  Path(path): Path<String>,
  Query(params): Query<PageParams>,
) -> Response {
  render(&state, &format!("/{path}"), &params).await
}

async fn load_navigation(state: &AppState, locale: Locale) -> Vec<NavItem> {
  let menu = state.resolver.menu().await;
  project_navigation(&menu, locale, state.resolver.table())
}

async fn render(state: &AppState, public_path: &str, params: &PageParams) -> Response {
  let resolver = &state.resolver;
  let table = resolver.table();
  let (locale, path) = split_locale_prefix(public_path);

  let mut ctx = AlternateSlugContext::new();
  let matched = resolver.resolve_path(locale, path, &mut ctx).await;

  match matched {
    PageMatch::Redirect(location) => Redirect::permanent(&encode_path(&location)).into_response(),
    PageMatch::NotFound => {
      let navigation = load_navigation(state, locale).await;
      let (title, message, label) = not_found_text(locale);
      let body = NotFoundData {
        locale,
        path: public_path,
        title,
        message,
        home: HomeLink { href: localize_path("/", locale), label },
        alternates: alternates(public_path, &ctx, table),
        navigation,
      };
      (StatusCode::NOT_FOUND, Json(body)).into_response()
    }
    PageMatch::Static(route) => {
      let navigation = load_navigation(state, locale).await;
      let listing = match route.listing {
        Some(kind) => Some((kind, resolver.list(kind, &listing_query(locale, &route, params)).await)),
        None => None,
      };
      let matched = MatchData::Static {
        route: &route.key,
        listing: listing.as_ref().map(|(kind, page)| Listing { kind: *kind, page: page.as_ref() }),
      };
      page_response(public_path, locale, matched, &ctx, table, navigation)
    }
    PageMatch::Entity { kind, entity } => {
      let navigation = load_navigation(state, locale).await;
      let matched = MatchData::Entity { kind, entity: entity.as_ref() };
      page_response(public_path, locale, matched, &ctx, table, navigation)
    }
  }
}

fn page_response(
  public_path: &str,
  locale: Locale,
  matched: MatchData<'_>,
  ctx: &AlternateSlugContext,
  table: &RoutingTable,
  navigation: Vec<NavItem>,
) -> Response {
  let body = PageData {
    locale,
    path: public_path,
    matched,
    alternates: alternates(public_path, ctx, table),
    alternate_slugs: ctx,
    navigation,
  };
  Json(body).into_response()
}
