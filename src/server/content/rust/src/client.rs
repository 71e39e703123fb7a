/* src/server/content/rust/src/client.rs */

use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use unisite_core::{
  BoxFuture, ContentEntity, ContentSource, EntityKind, FetchError, ListQuery, Locale, MenuTree,
  Paginated,
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// `{ data }` single-entity envelope; `data` may be null.
#[derive(Deserialize)]
struct Envelope<T> {
  data: Option<T>,
}

/// Content API over HTTP. One pooled client per process; every request carries the timeout.
#[derive(Clone)]
pub struct HttpContentSource {
  client: reqwest::Client,
  base: Url,
  timeout: Duration,
}

impl HttpContentSource {
  pub fn new(base_url: &str) -> Result<Self, FetchError> {
    Self::with_timeout(base_url, DEFAULT_TIMEOUT)
  }

  pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
    let base = Url::parse(base_url)
      .map_err(|e| FetchError::Transport(format!("invalid content API url {base_url}: {e}")))?;
    if base.cannot_be_a_base() {
      return Err(FetchError::Transport(format!("content API url {base_url} cannot be a base")));
    }
    let client = reqwest::Client::builder()
      .timeout(timeout)
      .user_agent(concat!("unisite/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| FetchError::Transport(e.to_string()))?;
    Ok(Self { client, base, timeout })
  }

  pub fn base_url(&self) -> &Url {
    &self.base
  }

  /// Base URL with `segments` appended, each percent-encoded, and `query` attached.
  pub(crate) fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Url {
    let mut url = self.base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
      path.pop_if_empty().extend(segments);
    }
    if !query.is_empty() {
      url.query_pairs_mut().extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    url
  }

  /// GET and decode. `Ok(None)` on 404; any other non-success status is an error.
  async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, FetchError> {
    debug!(%url, "content API request");
    let resp = self.client.get(url.clone()).send().await.map_err(|e| self.map_err(&e))?;
    let status = resp.status();
    if status == StatusCode::NOT_FOUND {
      return Ok(None);
    }
    if !status.is_success() {
      return Err(FetchError::Status { status: status.as_u16(), url: url.to_string() });
    }
    let body = resp.bytes().await.map_err(|e| self.map_err(&e))?;
    serde_json::from_slice(&body).map(Some).map_err(|e| FetchError::Decode(format!("{url}: {e}")))
  }

  fn map_err(&self, err: &reqwest::Error) -> FetchError {
    if err.is_timeout() {
      let ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
      FetchError::Timeout(ms)
    } else if err.is_decode() {
      FetchError::Decode(err.to_string())
    } else {
      FetchError::Transport(err.to_string())
    }
  }
}

impl ContentSource for HttpContentSource {
  fn fetch_by_slug<'a>(
    &'a self,
    kind: EntityKind,
    slug: &'a str,
    locale: Locale,
  ) -> BoxFuture<'a, Result<Option<ContentEntity>, FetchError>> {
    Box::pin(async move {
      let url = self.endpoint(&[kind.api_path(), slug], &[("locale", locale.as_str().to_string())]);
      let envelope: Option<Envelope<ContentEntity>> = self.get_json(url).await?;
      Ok(envelope.and_then(|e| e.data))
    })
  }

  fn fetch_list<'a>(
    &'a self,
    kind: EntityKind,
    query: &'a ListQuery,
  ) -> BoxFuture<'a, Result<Paginated<ContentEntity>, FetchError>> {
    Box::pin(async move {
      let url = self.endpoint(&[kind.api_path()], &query.to_pairs());
      let page: Option<Paginated<ContentEntity>> = self.get_json(url).await?;
      Ok(page.unwrap_or_else(|| Paginated::empty(query)))
    })
  }

  fn fetch_menu(&self) -> BoxFuture<'_, Result<MenuTree, FetchError>> {
    Box::pin(async move {
      let url = self.endpoint(&["misc", "menu"], &[]);
      let value: Option<serde_json::Value> = self.get_json(url.clone()).await?;
      match value {
        Some(v) => MenuTree::from_value(&v),
        None => Err(FetchError::Status { status: 404, url: url.to_string() }),
      }
    })
  }
}
