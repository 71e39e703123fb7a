/* src/cli/core/src/serve.rs */

use std::sync::Arc;

use anyhow::{Context, Result};
use unisite_axum::{IntoAxumRouter, forward_pages};
use unisite_content::HttpContentSource;
use unisite_core::{Site, SiteParts};

use crate::config::SiteConfig;
use crate::ui;

/// Wire config into site parts backed by the HTTP Content API.
pub fn site_parts(config: &SiteConfig) -> Result<SiteParts> {
  let api_url = config.content.require_api_url()?;
  let source = HttpContentSource::with_timeout(api_url, config.content.timeout())
    .with_context(|| format!("failed to create content client for {api_url}"))?;
  let site = Site::new(Arc::new(source))
    .routing_table(config.routing_table()?)
    .base_url(config.site.base_url.as_str())
    .revalidate(config.content.revalidate())
    .sitemap_pages(config.sitemap.pages.iter().cloned());
  Ok(site.into_parts())
}

pub async fn run_serve(config: &SiteConfig) -> Result<()> {
  let parts = site_parts(config)?;
  let router = forward_pages(parts.into_axum_router());

  let addr = format!("{}:{}", config.server.host, config.server.port);
  let listener =
    tokio::net::TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {addr}"))?;
  let local_addr = listener.local_addr()?;

  ui::ok(&format!("listening on http://localhost:{}", local_addr.port()));
  ui::detail(&format!("content API  {}", config.content.require_api_url()?));
  ui::detail(&format!("revalidate   {}s", config.content.revalidate_secs));
  tracing::info!(%local_addr, base_url = %config.site.base_url, "server started");

  axum::serve(listener, router)
    .with_graceful_shutdown(async {
      let _ = tokio::signal::ctrl_c().await;
      tracing::info!("shutting down");
    })
    .await
    .context("server error")?;
  Ok(())
}
