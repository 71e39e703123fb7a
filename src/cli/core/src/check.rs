/* src/cli/core/src/check.rs */

use std::path::Path;

use anyhow::Result;
use unisite_core::{Locale, MenuTree, RoutingTable, collect_localized_pairs};

use crate::config::SiteConfig;
use crate::ui;

/// Static routes whose paths do not survive a translate round-trip.
pub fn broken_round_trips(table: &RoutingTable) -> Vec<String> {
  let mut broken = Vec::new();
  for route in table.static_routes() {
    let az = table.public_route_path(route, Locale::Az);
    let en = table.public_route_path(route, Locale::En);
    if table.switch_locale_path(&az, Locale::En) != en || table.switch_locale_path(&en, Locale::Az) != az {
      broken.push(route.key.clone());
    }
  }
  broken
}

pub fn run_check(path: &Path, config: &SiteConfig) -> Result<()> {
  ui::ok(&format!("config {}", path.display()));
  let table = config.routing_table()?;
  ui::ok(&format!(
    "routing table: {} segments, {} static routes",
    table.mappings().len(),
    table.static_routes().len()
  ));

  let broken = broken_round_trips(&table);
  if !broken.is_empty() {
    for key in &broken {
      ui::fail(&format!("route \"{key}\" does not round-trip"));
    }
    anyhow::bail!("{} static routes fail the az <-> en round-trip", broken.len());
  }
  ui::ok("every static route round-trips az <-> en");

  let pairs = collect_localized_pairs(&MenuTree::fallback(), &table);
  ui::ok(&format!("bundled fallback menu: {} localized links", pairs.len()));

  match config.content.api_url.as_deref() {
    Some(url) => ui::ok(&format!("content API {url}")),
    None => ui::warn("content.api_url is not set; `serve` and `sitemap` need it"),
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use unisite_core::RouteSegmentMapping;

  use super::*;

  #[test]
  fn builtin_table_round_trips() {
    assert!(broken_round_trips(&RoutingTable::builtin()).is_empty());
  }

  #[test]
  fn configured_routes_round_trip() {
    let table = RoutingTable::builtin()
      .with_mappings(vec![RouteSegmentMapping::new("alumni", "mezunlar", "alumni")])
      .unwrap();
    assert!(broken_round_trips(&table).is_empty());
  }
}
