/* src/server/content/rust/src/tests.rs */

use std::collections::HashMap;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::{Value, json};
use unisite_core::{ContentSource, EntityKind, FetchError, ListQuery, Locale};

use crate::HttpContentSource;

async fn news(Path(slug): Path<String>, Query(q): Query<HashMap<String, String>>) -> impl IntoResponse {
  let locale = q.get("locale").map_or("", String::as_str);
  match (slug.as_str(), locale) {
    ("yeni-bina", "az") | ("new-building", "en") => Json(json!({
      "data": {
        "id": 1,
        "slug": { "az": "yeni-bina", "en": "new-building" },
        "title": { "az": "Yeni bina", "en": "New building" },
        "isPublished": true,
        "updatedAt": "2026-03-01T10:00:00Z"
      }
    }))
    .into_response(),
    ("bos", _) => Json(json!({ "data": null })).into_response(),
    ("zerf", _) => Json(json!({})).into_response(),
    ("xəbər 1", "az") => Json(json!({ "data": { "id": "u", "slug": { "az": "xəbər 1" } } })).into_response(),
    _ => StatusCode::NOT_FOUND.into_response(),
  }
}

async fn events(Query(q): Query<HashMap<String, String>>) -> Json<Value> {
  let page: u32 = q.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
  Json(json!({
    "data": [{ "id": format!("{page}-{}", q.get("category").map_or("all", String::as_str)), "slug": { "az": "t" } }],
    "pagination": { "page": page, "limit": 12, "total": 1, "totalPages": 1 }
  }))
}

async fn menu() -> Json<Value> {
  Json(json!({ "data": { "contact": { "title": { "az": "Əlaqə", "en": "Contact" }, "href": "/elaqe" } } }))
}

async fn slow() -> Json<Value> {
  tokio::time::sleep(Duration::from_secs(2)).await;
  Json(json!({ "data": null }))
}

fn router() -> Router {
  Router::new()
    .route("/api/news/{slug}", get(news))
    .route("/api/events", get(events))
    .route("/api/misc/menu", get(menu))
    .route("/api/blogs/{slug}", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
    .route("/api/persons/{slug}", get(|| async { "not json" }))
    .route("/api/pages/{slug}", get(slow))
}

async fn spawn(router: Router) -> String {
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
  format!("http://{addr}/api")
}

async fn client() -> HttpContentSource {
  HttpContentSource::with_timeout(&spawn(router()).await, Duration::from_millis(300)).unwrap()
}

#[test]
fn rejects_invalid_base() {
  assert!(matches!(HttpContentSource::new("not a url"), Err(FetchError::Transport(_))));
  assert!(HttpContentSource::new("mailto:cms@example.az").is_err());
}

#[test]
fn endpoint_encodes_segments_and_query() {
  let source = HttpContentSource::new("https://cms.example.az/api/").unwrap();
  let url = source.endpoint(&["news", "xəbər 1"], &[("locale", "az".to_string())]);
  assert_eq!(url.as_str(), "https://cms.example.az/api/news/x%C9%99b%C9%99r%201?locale=az");

  let mut query = ListQuery::new(Locale::En);
  query.search = Some("a&b".into());
  let url = source.endpoint(&["events"], &query.to_pairs());
  assert_eq!(url.query(), Some("locale=en&page=1&limit=12&search=a%26b"));
}

#[tokio::test]
async fn fetches_entity_by_locale_slug() {
  let source = client().await;
  let entity = source.fetch_by_slug(EntityKind::News, "new-building", Locale::En).await.unwrap().unwrap();
  assert_eq!(entity.id, "1");
  assert_eq!(entity.slug.get_strict(Locale::Az), Some("yeni-bina"));
  assert!(entity.last_modified().is_some());
}

#[tokio::test]
async fn encoded_slug_reaches_server() {
  let source = client().await;
  let entity = source.fetch_by_slug(EntityKind::News, "xəbər 1", Locale::Az).await.unwrap();
  assert_eq!(entity.map(|e| e.id), Some("u".to_string()));
}

#[tokio::test]
async fn missing_entity_is_none() {
  let source = client().await;
  assert!(source.fetch_by_slug(EntityKind::News, "yoxdur", Locale::Az).await.unwrap().is_none());
  assert!(source.fetch_by_slug(EntityKind::News, "bos", Locale::Az).await.unwrap().is_none());
  // envelope without a data key
  assert!(source.fetch_by_slug(EntityKind::News, "zerf", Locale::Az).await.unwrap().is_none());
}

#[tokio::test]
async fn server_error_is_status() {
  let source = client().await;
  let err = source.fetch_by_slug(EntityKind::Blog, "x", Locale::Az).await.unwrap_err();
  assert!(matches!(err, FetchError::Status { status: 500, .. }));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
  let source = client().await;
  let err = source.fetch_by_slug(EntityKind::Person, "x", Locale::Az).await.unwrap_err();
  assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn slow_upstream_times_out() {
  let source = client().await;
  let err = source.fetch_by_slug(EntityKind::Page, "x", Locale::Az).await.unwrap_err();
  assert!(matches!(err, FetchError::Timeout(300)));
}

#[tokio::test]
async fn list_passes_query() {
  let source = client().await;
  let mut query = ListQuery::new(Locale::Az);
  query.page = 3;
  query.category = Some("announcement".into());
  let page = source.fetch_list(EntityKind::Event, &query).await.unwrap();
  assert_eq!(page.data[0].id, "3-announcement");
  assert_eq!(page.pagination.total_pages, 1);
}

#[tokio::test]
async fn missing_collection_is_empty_page() {
  let source = client().await;
  let page = source.fetch_list(EntityKind::Faculty, &ListQuery::new(Locale::Az)).await.unwrap();
  assert!(page.data.is_empty());
}

#[tokio::test]
async fn menu_is_normalized() {
  let source = client().await;
  let tree = source.fetch_menu().await.unwrap();
  assert_eq!(tree.roots.len(), 1);
  assert_eq!(tree.roots[0].id, "contact");
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
  let source = HttpContentSource::new("http://127.0.0.1:1/api").unwrap();
  let err = source.fetch_menu().await.unwrap_err();
  assert!(matches!(err, FetchError::Transport(_)));
}
