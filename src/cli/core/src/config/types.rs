/* src/cli/core/src/config/types.rs */

use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use unisite_core::{ExtraPage, Locale, RouteSegmentMapping, RoutingTable};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
  #[serde(default)]
  pub site: SiteSection,
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub content: ContentSection,
  #[serde(default)]
  pub i18n: I18nSection,
  /// Extra segment translations layered over the built-in table.
  #[serde(default)]
  pub routes: Vec<RouteSegmentMapping>,
  #[serde(default)]
  pub sitemap: SitemapSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
  #[serde(default = "default_base_url")]
  pub base_url: String,
}

impl Default for SiteSection {
  fn default() -> Self {
    Self { base_url: default_base_url() }
  }
}

fn default_base_url() -> String {
  "http://localhost:3000".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { host: default_host(), port: default_port() }
  }
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  3000
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentSection {
  pub api_url: Option<String>,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
  #[serde(default = "default_revalidate_secs")]
  pub revalidate_secs: u64,
}

impl Default for ContentSection {
  fn default() -> Self {
    Self {
      api_url: None,
      timeout_secs: default_timeout_secs(),
      revalidate_secs: default_revalidate_secs(),
    }
  }
}

impl ContentSection {
  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }

  pub fn revalidate(&self) -> Duration {
    Duration::from_secs(self.revalidate_secs)
  }

  pub fn require_api_url(&self) -> Result<&str> {
    self
      .api_url
      .as_deref()
      .filter(|u| !u.trim().is_empty())
      .context("content.api_url is not set (set it in unisite.toml or UNISITE_API_URL)")
  }
}

fn default_timeout_secs() -> u64 {
  10
}

fn default_revalidate_secs() -> u64 {
  300
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nSection {
  #[serde(default = "default_i18n_default")]
  pub default: String,
  #[serde(default = "default_locales")]
  pub locales: Vec<String>,
}

impl Default for I18nSection {
  fn default() -> Self {
    Self { default: default_i18n_default(), locales: default_locales() }
  }
}

impl I18nSection {
  /// The URL scheme is fixed: bare paths are Azerbaijani, `/en` is English.
  pub fn validate(&self) -> Result<()> {
    if self.default != Locale::DEFAULT.as_str() {
      bail!("i18n.default must be \"{}\", got \"{}\"", Locale::DEFAULT, self.default);
    }
    for locale in &self.locales {
      locale.parse::<Locale>().with_context(|| format!("i18n.locales contains \"{locale}\""))?;
    }
    for locale in Locale::ALL {
      if !self.locales.iter().any(|l| l.eq_ignore_ascii_case(locale.as_str())) {
        bail!("i18n.locales {:?} is missing \"{locale}\"", self.locales);
      }
    }
    Ok(())
  }
}

fn default_i18n_default() -> String {
  Locale::DEFAULT.as_str().to_string()
}

fn default_locales() -> Vec<String> {
  Locale::ALL.iter().map(|l| l.as_str().to_string()).collect()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SitemapSection {
  #[serde(default)]
  pub pages: Vec<ExtraPage>,
}

impl SiteConfig {
  /// Built-in segment table with `[[routes]]` layered on top.
  pub fn routing_table(&self) -> Result<RoutingTable> {
    RoutingTable::builtin().with_mappings(self.routes.clone()).context("invalid [[routes]] table")
  }

  /// Apply `PORT` and `UNISITE_API_URL` overrides from `lookup`.
  pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
    if let Some(port) = lookup("PORT") {
      self.server.port = port.trim().parse().with_context(|| format!("PORT=\"{port}\" is not a port"))?;
    }
    if let Some(url) = lookup("UNISITE_API_URL").filter(|u| !u.trim().is_empty()) {
      self.content.api_url = Some(url);
    }
    Ok(())
  }

  pub fn validate(&self) -> Result<()> {
    self.i18n.validate()?;
    let base = &self.site.base_url;
    if !(base.starts_with("http://") || base.starts_with("https://")) {
      bail!("site.base_url \"{base}\" must be an absolute http(s) URL");
    }
    if self.content.timeout_secs == 0 {
      bail!("content.timeout_secs must be greater than zero");
    }
    for (i, page) in self.sitemap.pages.iter().enumerate() {
      if page.az.is_none() && page.en.is_none() {
        bail!("sitemap.pages[{i}] has neither az nor en");
      }
      for path in [&page.az, &page.en].into_iter().flatten() {
        if !path.starts_with('/') {
          bail!("sitemap.pages[{i}] path \"{path}\" must start with '/'");
        }
      }
    }
    self.routing_table()?;
    Ok(())
  }
}
