/* src/cli/core/src/translate.rs */

use unisite_core::{Locale, RoutingTable, split_locale_prefix};

use crate::ui;

/// Public path rewritten for `to`, segment by segment. No Content API lookup.
pub fn translate(table: &RoutingTable, path: &str, to: Locale) -> String {
  table.switch_locale_path(path, to)
}

pub fn run_translate(table: &RoutingTable, path: &str, to: Locale) {
  let (from, rest) = split_locale_prefix(path);
  let translated = translate(table, path, to);
  ui::arrow(&format!("{path} ({from}) -> {translated} ({to})"));
  match table.match_static(from, rest) {
    Some(route) => ui::detail(&format!("static route \"{}\"", route.key)),
    None => ui::detail("no static route; entity slugs are passed through unchanged"),
  }
}
