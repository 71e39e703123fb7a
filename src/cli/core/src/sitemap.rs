/* src/cli/core/src/sitemap.rs */

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use unisite_core::{build_sitemap, render_sitemap_xml};

use crate::config::SiteConfig;
use crate::serve::site_parts;
use crate::ui;

/// Build the sitemap against the live Content API and write it to `out`.
pub async fn run_sitemap(config: &SiteConfig, out: &Path) -> Result<()> {
  let parts = site_parts(config)?;
  ui::arrow(&format!("building sitemap for {}", parts.base_url));

  let entries = build_sitemap(&parts.resolver, &parts.base_url, &parts.sitemap_pages, Utc::now()).await;
  let with_alternates = entries.iter().filter(|e| e.alternates.languages.len() > 1).count();
  let xml = render_sitemap_xml(&entries);

  std::fs::write(out, xml).with_context(|| format!("failed to write {}", out.display()))?;
  ui::ok(&format!("{} urls ({with_alternates} with both locales)", entries.len()));
  ui::ok(&format!("saved {}", out.display()));
  Ok(())
}
