/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::SiteConfig;

pub const CONFIG_FILE: &str = "unisite.toml";

/// Walk upward from `start` to find `unisite.toml`, like Cargo.toml discovery
pub fn find_site_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

/// Parse and validate. Environment overrides are applied by the caller.
pub fn load_site_config(path: &Path) -> Result<SiteConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  parse_site_config(&content).with_context(|| format!("invalid config {}", path.display()))
}

pub fn parse_site_config(content: &str) -> Result<SiteConfig> {
  let config: SiteConfig = toml::from_str(content).context("failed to parse TOML")?;
  config.validate()?;
  Ok(config)
}
