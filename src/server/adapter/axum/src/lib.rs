/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use axum::Router;
use axum::extract::Request;
use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;
use tower::ServiceExt;
use unisite_core::{Site, SiteParts};

/// Re-export unisite-core for convenience
pub use unisite_core;

/// Prefix under which page data is served.
pub const PAGE_PREFIX: &str = "/_site/page";

/// Extension trait that converts a `Site` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for SiteParts {
  fn into_axum_router(self) -> Router {
    handler::build_router(self.resolver, self.base_url, self.sitemap_pages)
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = forward_pages(self.into_axum_router());
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, "unisite listening");
    axum::serve(listener, router).await?;
    Ok(())
  }
}

impl IntoAxumRouter for Site {
  fn into_axum_router(self) -> Router {
    self.into_parts().into_axum_router()
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    self.into_parts().serve(addr).await
  }
}

/// Answer public paths by forwarding every unmatched GET to `/_site/page/*`.
pub fn forward_pages(router: Router) -> Router {
  let page_forwarder = router.clone();
  router.fallback(move |req: Request| {
    let svc = page_forwarder.clone();
    async move {
      if req.method() != Method::GET {
        return StatusCode::NOT_FOUND.into_response();
      }
      let path = req.uri().path();
      let target = if path == "/" { PAGE_PREFIX.to_string() } else { format!("{PAGE_PREFIX}{path}") };
      let query = req.uri().query().map(|q| format!("?{q}")).unwrap_or_default();
      let Ok(new_uri) = format!("{target}{query}").parse::<Uri>() else {
        return StatusCode::BAD_REQUEST.into_response();
      };
      let (mut parts, body) = req.into_parts();
      parts.uri = new_uri;
      svc.oneshot(Request::from_parts(parts, body)).await.into_response()
    }
  })
}
